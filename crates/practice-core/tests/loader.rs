use practice_core::{
    DataLoader, FAILURE_PERCENT, LOAD_DELAY, LoadError, NotificationLevel, RecordingNotifier, Row,
    render::render_loader, render_text,
};

fn dataset() -> Vec<Row> {
    vec![
        Row::new([("name", "Alice")]),
        Row::new([("name", "Bob")]),
    ]
}

#[test]
fn trigger_is_disabled_while_pending() {
    let notifier = RecordingNotifier::new();
    let mut loader = DataLoader::new(dataset(), || 99u8);
    assert!(loader.control_enabled());

    let ticket = loader.begin().expect("first click starts a load");
    assert!(!loader.control_enabled());
    assert_eq!(loader.begin(), Err(LoadError::Busy));

    let rows = loader.complete(ticket, &notifier).expect("load succeeds");
    assert_eq!(rows.len(), 2);
    assert!(loader.control_enabled());
    assert_eq!(loader.loaded().map(<[_]>::len), Some(2));
    assert_eq!(notifier.last().unwrap().level, NotificationLevel::Success);
}

#[test]
fn simulated_failure_notifies_and_reenables() {
    let notifier = RecordingNotifier::new();
    let mut loader = DataLoader::new(dataset(), || FAILURE_PERCENT - 1);
    let ticket = loader.begin().unwrap();
    assert_eq!(loader.complete(ticket, &notifier), Err(LoadError::Network));
    assert!(loader.control_enabled());
    assert!(loader.loaded().is_none());

    let toast = notifier.last().unwrap();
    assert_eq!(toast.level, NotificationLevel::Error);
    assert!(toast.message.starts_with("Network error"));

    let text = render_text(&render_loader(&loader, notifier.take()));
    assert!(text.contains("Load button enabled: yes"));
    assert!(text.contains("[toast] Network error"));
}

#[test]
fn roll_at_threshold_succeeds() {
    let notifier = RecordingNotifier::new();
    let mut loader = DataLoader::new(dataset(), || FAILURE_PERCENT);
    let ticket = loader.begin().unwrap();
    assert!(loader.complete(ticket, &notifier).is_ok());
}

#[test]
fn ticket_from_another_loader_is_rejected() {
    let notifier = RecordingNotifier::new();
    let mut busy = DataLoader::new(dataset(), || 99u8);
    let mut idle = DataLoader::new(dataset(), || 99u8);
    let ticket = busy.begin().unwrap();
    assert_eq!(idle.complete(ticket, &notifier), Err(LoadError::StaleTicket));
    assert!(!busy.control_enabled());
    assert!(notifier.is_empty());
}

#[tokio::test(start_paused = true)]
async fn load_waits_for_the_fixed_delay() {
    let notifier = RecordingNotifier::new();
    let mut loader = DataLoader::new(dataset(), || 50u8);
    let started = tokio::time::Instant::now();
    let rows = loader.load(&notifier).await.expect("load succeeds");
    assert_eq!(rows.len(), 2);
    assert!(started.elapsed() >= LOAD_DELAY);
    assert_eq!(notifier.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_load_is_not_retried() {
    let notifier = RecordingNotifier::new();
    let mut rolls = vec![0u8, 99].into_iter();
    let mut loader = DataLoader::new(dataset(), move || rolls.next().unwrap_or(99));
    assert_eq!(loader.load(&notifier).await, Err(LoadError::Network));
    assert_eq!(notifier.len(), 1);
    assert!(loader.load(&notifier).await.is_ok());
    assert_eq!(notifier.len(), 2);
}
