//! Periodic overdue-task autoclose loop.
//!
//! Runs [`AutocloseService::run_once`] on a fixed interval until the
//! cancellation token fires. A failed pass is logged and retried on the next
//! tick.

use crate::board::{ports::TaskRepository, services::AutocloseService};
use mockable::Clock;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Runs the autoclose job every `interval` until `cancel` is triggered.
///
/// The first pass runs immediately. A zero interval is refused and the
/// function returns at once.
pub async fn run_autoclose_loop<T, C>(
    service: AutocloseService<T, C>,
    interval: Duration,
    cancel: CancellationToken,
) where
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    if interval.is_zero() {
        tracing::error!("overdue autoclose job not started: interval must be non-zero");
        return;
    }

    tracing::info!(
        interval_secs = interval.as_secs(),
        "overdue autoclose job started"
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::info!("overdue autoclose job stopping");
                break;
            }
            _ = ticker.tick() => {
                match service.run_once().await {
                    Ok(closed) if closed > 0 => {
                        tracing::info!(closed, "autoclose: closed overdue tasks");
                    }
                    Ok(_) => tracing::debug!("autoclose: no overdue tasks"),
                    Err(err) => tracing::error!(error = %err, "autoclose: pass failed"),
                }
            }
        }
    }
}
