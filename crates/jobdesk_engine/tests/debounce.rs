use std::sync::mpsc;
use std::time::Duration;

use jobdesk_engine::{DebounceTimer, EngineEvent};
use tokio::runtime::Handle;

const DELAY: Duration = Duration::from_millis(300);

fn drain(rx: &mpsc::Receiver<EngineEvent>) -> Vec<EngineEvent> {
    rx.try_iter().collect()
}

#[tokio::test(start_paused = true)]
async fn burst_within_interval_settles_once_with_last_ticket() {
    let (tx, rx) = mpsc::channel();
    let mut timer = DebounceTimer::new(Handle::current(), tx);

    timer.start(1, DELAY);
    tokio::time::sleep(Duration::from_millis(100)).await;
    timer.start(2, DELAY);
    tokio::time::sleep(Duration::from_millis(100)).await;
    timer.start(3, DELAY);
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(drain(&rx).is_empty());

    tokio::time::sleep(Duration::from_millis(100)).await;
    tokio::task::yield_now().await;
    assert_eq!(drain(&rx), vec![EngineEvent::DebounceSettled { ticket: 3 }]);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(drain(&rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let (tx, rx) = mpsc::channel();
    let mut timer = DebounceTimer::new(Handle::current(), tx);

    timer.start(1, DELAY);
    tokio::time::sleep(Duration::from_millis(50)).await;
    timer.cancel();
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(drain(&rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn separate_bursts_each_settle() {
    let (tx, rx) = mpsc::channel();
    let mut timer = DebounceTimer::new(Handle::current(), tx);

    timer.start(1, DELAY);
    tokio::time::sleep(Duration::from_millis(400)).await;
    timer.start(2, DELAY);
    tokio::time::sleep(Duration::from_millis(400)).await;
    tokio::task::yield_now().await;

    assert_eq!(
        drain(&rx),
        vec![
            EngineEvent::DebounceSettled { ticket: 1 },
            EngineEvent::DebounceSettled { ticket: 2 },
        ]
    );
}
