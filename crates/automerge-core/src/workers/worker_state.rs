use std::collections::VecDeque;

use automerge_models::PullRequestHandle;

/// Outcome of [`WorkerState::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// The worker was idle, the task is now current.
    Started,
    /// Appended to the backlog, at this zero-based position.
    Queued { position: usize },
    /// The task is already current and was dropped.
    AlreadyRunning,
}

/// Task state of one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkerState {
    #[default]
    Idle,
    Running {
        current: PullRequestHandle,
        backlog: VecDeque<PullRequestHandle>,
    },
}

impl WorkerState {
    pub fn enqueue(&mut self, task: PullRequestHandle) -> EnqueueOutcome {
        match self {
            Self::Idle => {
                *self = Self::Running {
                    current: task,
                    backlog: VecDeque::new(),
                };
                EnqueueOutcome::Started
            }
            Self::Running { current, .. } if *current == task => EnqueueOutcome::AlreadyRunning,
            Self::Running { backlog, .. } => {
                backlog.push_back(task);
                EnqueueOutcome::Queued {
                    position: backlog.len() - 1,
                }
            }
        }
    }

    /// Finish the current task and promote the oldest queued one.
    pub fn complete(&mut self) -> Option<PullRequestHandle> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Running { mut backlog, .. } => {
                let next = backlog.pop_front()?;
                *self = Self::Running {
                    current: next.clone(),
                    backlog,
                };
                Some(next)
            }
        }
    }

    pub fn current(&self) -> Option<&PullRequestHandle> {
        match self {
            Self::Idle => None,
            Self::Running { current, .. } => Some(current),
        }
    }

    pub fn backlog(&self) -> Vec<PullRequestHandle> {
        match self {
            Self::Idle => vec![],
            Self::Running { backlog, .. } => backlog.iter().cloned().collect(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
