use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use azclassic::cloudprovider::InstanceStatus;
use azclassic::utils::normalize_status;

/// Counts error-level events.
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn normalize_counting(raw: &str) -> (InstanceStatus, usize) {
    let counter = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(counter.clone()));
    let status = tracing::subscriber::with_default(subscriber, || normalize_status("vm-1", raw));
    (status, counter.load(Ordering::SeqCst))
}

#[test]
fn test_known_statuses() {
    assert_eq!(normalize_counting("StoppedDeallocated"), (InstanceStatus::Ready, 0));
    assert_eq!(normalize_counting("Stopped"), (InstanceStatus::Ready, 0));
    assert_eq!(normalize_counting("ReadyRole"), (InstanceStatus::Running, 0));
    assert_eq!(normalize_counting("RoleStateUnknown"), (InstanceStatus::Unknown, 0));
}

#[test]
fn test_unrecognized_status_logs_once() {
    for raw in ["Provisioning", "readyrole", "", "BusyRole"] {
        let (status, errors) = normalize_counting(raw);
        assert_eq!(status, InstanceStatus::Unknown, "raw status {:?}", raw);
        assert_eq!(errors, 1, "raw status {:?}", raw);
    }
}
