use shared::domain::CollectionKind;
use tokio::sync::mpsc::UnboundedReceiver;

use super::*;

fn activate(index: usize) -> OutboundIntent {
    OutboundIntent::Activate {
        collection: CollectionKind::Dependencies,
        index,
    }
}

fn drain(rx: &mut UnboundedReceiver<OutboundIntent>) -> Vec<OutboundIntent> {
    let mut intents = Vec::new();
    while let Ok(intent) = rx.try_recv() {
        intents.push(intent);
    }
    intents
}

#[tokio::test(start_paused = true)]
async fn fires_once_after_delay() {
    let (outbox, mut rx) = Outbox::channel();
    let mut scheduler = ActivationScheduler::new(Duration::from_millis(100));

    scheduler.schedule(4, activate(4), &outbox);
    assert_eq!(scheduler.pending_index(), Some(4));

    tokio::time::sleep(Duration::from_millis(99)).await;
    assert!(drain(&mut rx).is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(drain(&mut rx), vec![activate(4)]);
    assert!(!scheduler.is_pending());
}

#[tokio::test(start_paused = true)]
async fn rescheduling_coalesces_to_last_index() {
    let (outbox, mut rx) = Outbox::channel();
    let mut scheduler = ActivationScheduler::new(Duration::from_millis(100));

    for index in [1, 2, 3] {
        scheduler.schedule(index, activate(index), &outbox);
        tokio::time::sleep(Duration::from_millis(60)).await;
    }
    assert!(drain(&mut rx).is_empty());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(drain(&mut rx), vec![activate(3)]);
}

#[tokio::test(start_paused = true)]
async fn cancel_suppresses_activation() {
    let (outbox, mut rx) = Outbox::channel();
    let mut scheduler = ActivationScheduler::new(Duration::from_millis(100));

    scheduler.schedule(2, activate(2), &outbox);
    assert_eq!(scheduler.cancel(), Some(2));
    assert_eq!(scheduler.cancel(), None);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_after_fire_reports_nothing() {
    let (outbox, mut rx) = Outbox::channel();
    let mut scheduler = ActivationScheduler::new(Duration::from_millis(100));

    scheduler.schedule(0, activate(0), &outbox);
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(scheduler.cancel(), None);
    assert_eq!(drain(&mut rx), vec![activate(0)]);
}

#[test]
fn sends_immediately_without_runtime() {
    let (outbox, mut rx) = Outbox::channel();
    let mut scheduler = ActivationScheduler::new(Duration::from_millis(100));

    scheduler.schedule(1, activate(1), &outbox);

    assert!(!scheduler.is_pending());
    assert_eq!(drain(&mut rx), vec![activate(1)]);
}
