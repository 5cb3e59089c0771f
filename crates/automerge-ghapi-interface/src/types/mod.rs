//! Platform types.

mod checks;
mod common;
mod pulls;
mod reviews;

pub use checks::*;
pub use common::*;
pub use pulls::*;
pub use reviews::*;
