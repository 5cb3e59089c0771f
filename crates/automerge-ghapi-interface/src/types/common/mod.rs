mod branch;
mod user;

pub use branch::GhBranch;
pub use user::GhUser;
