//! Overdue task autoclose job.

use super::BoardServiceResult;
use crate::board::ports::TaskRepository;
use chrono::SubsecRound;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Closes every task whose deadline has passed and that is not yet done.
///
/// Each run re-evaluates the predicate against the clock, so the job is
/// idempotent and safe to repeat.
pub struct AutocloseService<T, C>
where
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<T, C> Clone for AutocloseService<T, C>
where
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<T, C> AutocloseService<T, C>
where
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new autoclose service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Runs one autoclose pass and returns how many tasks were closed.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::Repository`] when the batch update
    /// fails; nothing is closed in that case.
    pub async fn run_once(&self) -> BoardServiceResult<usize> {
        let now = self.clock.utc().trunc_subsecs(6);
        let today = now.date_naive();
        let closed = self.tasks.close_overdue_tasks(today, now).await?;
        debug!(closed, %today, "autoclose pass finished");
        Ok(closed)
    }
}
