mod message_generator;

pub use message_generator::{StatusMessage, StatusMessageGenerator};
