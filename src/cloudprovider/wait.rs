//! Fire-then-converge helper shared by lifecycle operations.

use std::time::Duration;

use tokio::time::Instant;

use super::{InstanceStatus, StatusSource};
use crate::error::{CloudError, CloudResult};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(300);

/// Poll interval and deadline used after a lifecycle action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitConfig {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }
}

/// Refresh `source` every `interval` until its status equals `expected`.
///
/// Each poll re-fetches the remote state exactly once and reads the status
/// from that copy; nothing is cached between polls.
/// No poll starts once `timeout` has elapsed, in which case
/// `CloudError::Timeout` is returned. A failed refresh aborts the wait and is
/// returned unchanged.
pub async fn wait_status<S>(
    source: &mut S,
    expected: InstanceStatus,
    interval: Duration,
    timeout: Duration,
) -> CloudResult<()>
where
    S: StatusSource + ?Sized,
{
    debug_assert!(!interval.is_zero(), "poll interval must be non-zero");
    let start = Instant::now();
    let mut polls = 0u32;
    while start.elapsed() < timeout {
        source.refresh().await?;
        polls += 1;
        let status = source.cached_status();
        tracing::debug!(
            "{} status {} expect {} (poll {})",
            source.name(),
            status,
            expected,
            polls
        );
        if status == expected {
            return Ok(());
        }
        tokio::time::sleep(interval).await;
    }
    Err(CloudError::Timeout {
        resource: source.name().to_string(),
        expected,
        elapsed: start.elapsed(),
    })
}
