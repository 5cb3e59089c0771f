//! Per-repository task scheduling.
//!
//! Every repository gets one [`RepositoryWorker`] for the process lifetime.
//! A worker runs at most one task at a time and keeps the others in a FIFO
//! backlog, while workers of different repositories run concurrently.

mod pool;
mod worker;
mod worker_state;

pub use pool::RepositoryWorkerPool;
pub use worker::{RepositoryWorker, WorkerStatus};
pub use worker_state::{EnqueueOutcome, WorkerState};
