use automerge_models::AuthorAssociation;
use serde::{Deserialize, Serialize};

use super::GhPullRequestState;
use crate::types::{GhBranch, GhCheckRun, GhReview, GhReviewState, GhUser};

/// Point-in-time view of a pull request.
///
/// Fetched again for every evaluation, never cached.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestSnapshot {
    /// Number.
    pub number: u64,
    /// State.
    pub state: GhPullRequestState,
    /// Title.
    pub title: String,
    /// Body.
    pub body: Option<String>,
    /// Author.
    pub user: GhUser,
    /// Author association with the repository.
    pub author_association: AuthorAssociation,
    /// Label names.
    pub labels: Vec<String>,
    /// Head branch.
    pub head: GhBranch,
    /// Base branch.
    pub base: GhBranch,
    /// Latest review of each reviewer.
    pub reviews: Vec<GhReview>,
    /// Check runs of the head commit, without the ones reported by the bot.
    pub check_runs: Vec<GhCheckRun>,
    /// Mergeable? `None` while the platform is still computing it.
    pub mergeable: Option<bool>,
    /// Is the head branch behind its base?
    pub behind_base: bool,
}

impl GhPullRequestSnapshot {
    /// Count reviews in `state` written by reviewers ranked at least `role`.
    pub fn count_reviews_from(&self, state: GhReviewState, role: AuthorAssociation) -> u32 {
        let count = self
            .reviews
            .iter()
            .filter(|r| r.state == state && r.author_association.is_at_least(role))
            .count();

        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Is the head branch hosted in the base repository?
    pub fn is_head_in_base_repository(&self) -> bool {
        self.head.repository == self.base.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(login: &str, role: AuthorAssociation, state: GhReviewState) -> GhReview {
        GhReview {
            user: login.into(),
            author_association: role,
            state,
            ..Default::default()
        }
    }

    #[test]
    fn count_reviews_by_role() {
        let snapshot = GhPullRequestSnapshot {
            reviews: vec![
                review("owner", AuthorAssociation::Owner, GhReviewState::Approved),
                review("member", AuthorAssociation::Member, GhReviewState::Approved),
                review("outsider", AuthorAssociation::None, GhReviewState::Approved),
                review("other", AuthorAssociation::Member, GhReviewState::ChangesRequested),
            ],
            ..Default::default()
        };

        let approvals = |role| snapshot.count_reviews_from(GhReviewState::Approved, role);
        assert_eq!(approvals(AuthorAssociation::Owner), 1);
        assert_eq!(approvals(AuthorAssociation::Member), 2);
        assert_eq!(approvals(AuthorAssociation::None), 3);
        assert_eq!(
            snapshot.count_reviews_from(GhReviewState::ChangesRequested, AuthorAssociation::None),
            1
        );
    }
}
