pub mod pulls;
pub mod status;
