use std::time::Duration;

use aedict_core::types::SegmentMode;
use tokio::time::timeout;

use crate::events::AppEvent;
use crate::io::parse_command;

#[tokio::test]
async fn test_tokio_spawn_from_sync_context() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let sync_callback = move || {
        tracing::debug!("Sync callback: spawning tokio task");
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::TextInput("test".to_string()))
                .await
                .expect("send failed");
        });
    };

    sync_callback();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;

    match result {
        Ok(Ok(AppEvent::TextInput(text))) => assert_eq!(text, "test"),
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - tokio::spawn from sync context failed!"),
    }
}

#[tokio::test]
async fn test_parsed_line_crosses_channel() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(4);

    let event = parse_command(":words").expect("command");
    tokio::spawn(async move {
        tx.send(event).await.expect("send failed");
    });

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    assert!(matches!(
        result,
        Ok(Ok(AppEvent::SetMode(SegmentMode::PerWord)))
    ));
}

#[tokio::test]
async fn test_spawn_blocking_to_kanal() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    tokio::task::spawn_blocking(move || {
        tx.try_send(AppEvent::Status("from blocking".to_string()))
            .unwrap();
    })
    .await
    .unwrap();

    let result = timeout(Duration::from_secs(1), rx.recv()).await.unwrap().unwrap();
    assert!(matches!(result, AppEvent::Status(s) if s == "from blocking"));
}

#[tokio::test]
async fn test_multiple_spawned_sends() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    for i in 0..100 {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::TextInput(format!("msg{}", i)))
                .await
                .expect("send failed");
        });
    }

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 100 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for events!");
    assert_eq!(count, 100);
}
