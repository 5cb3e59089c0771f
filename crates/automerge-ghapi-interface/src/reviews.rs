//! Reviews module.

use std::collections::HashMap;

use crate::types::GhReview;

/// Review helpers for snapshot providers.
pub struct ReviewApi;

impl ReviewApi {
    /// Reduce reviews in submission order to the latest review of each reviewer.
    ///
    /// Comments and pending reviews never replace an earlier verdict.
    pub fn latest_reviews(reviews: Vec<GhReview>) -> Vec<GhReview> {
        let mut output: HashMap<String, GhReview> = HashMap::new();

        for review in reviews {
            let overwrite_review = match output.get(&review.user.login) {
                Some(previous) => review.state.is_verdict() || !previous.state.is_verdict(),
                None => true,
            };

            if overwrite_review {
                output.insert(review.user.login.clone(), review);
            }
        }

        let mut res: Vec<_> = output.into_values().collect();
        res.sort_by(|a, b| {
            a.submitted_at
                .cmp(&b.submitted_at)
                .then_with(|| a.user.login.cmp(&b.user.login))
        });
        res
    }
}
