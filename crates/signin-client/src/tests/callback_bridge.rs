use crate::{CallbackBridge, OutOfBandCallback};

use tokio::time::{Duration, timeout};

#[test]
fn given_no_subscriber_when_published_then_lost() {
    let bridge = CallbackBridge::new();

    assert!(!bridge.publish(OutOfBandCallback::new("code-1", None)));
}

#[test]
fn given_publish_before_register_when_subscriber_registers_then_nothing_replayed() {
    let bridge = CallbackBridge::new();
    bridge.publish(OutOfBandCallback::new("early", None));

    let mut subscription = bridge.register();

    assert_eq!(subscription.try_recv(), None);
}

#[tokio::test]
async fn given_registered_subscriber_when_published_then_delivered_exactly_once() {
    let bridge = CallbackBridge::new();
    let mut subscription = bridge.register();

    let delivered = bridge.publish(OutOfBandCallback::new("code-1", Some("id.tok.en".into())));

    assert!(delivered);
    let received = timeout(Duration::from_millis(100), subscription.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(received.code, "code-1");
    assert_eq!(received.id_token.as_deref(), Some("id.tok.en"));
    assert_eq!(subscription.try_recv(), None);
}

#[tokio::test]
async fn given_publish_from_another_task_when_awaiting_then_received() {
    let bridge = CallbackBridge::new();
    let mut subscription = bridge.register();

    let publisher = bridge.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        publisher.publish(OutOfBandCallback::new("code-2", None));
    });

    let result = timeout(Duration::from_millis(200), subscription.recv()).await;
    assert_eq!(result.unwrap().unwrap().code, "code-2");
}

#[test]
fn given_second_register_when_published_then_only_newest_subscriber_receives() {
    let bridge = CallbackBridge::new();
    let mut first = bridge.register();
    let mut second = bridge.register();

    bridge.publish(OutOfBandCallback::new("code-3", None));

    assert_eq!(first.try_recv(), None);
    assert_eq!(second.try_recv().unwrap().code, "code-3");
}

#[test]
fn given_unregistered_bridge_when_unregistered_again_then_no_panic() {
    let bridge = CallbackBridge::new();
    let _subscription = bridge.register();

    bridge.unregister();
    bridge.unregister();

    assert!(!bridge.has_subscriber());
    assert!(!bridge.publish(OutOfBandCallback::new("late", None)));
}

#[test]
fn given_subscription_dropped_when_published_then_lost() {
    let bridge = CallbackBridge::new();
    let subscription = bridge.register();

    subscription.unregister();

    assert!(!bridge.has_subscriber());
    assert!(!bridge.publish(OutOfBandCallback::new("late", None)));
}

#[test]
fn given_replaced_subscription_dropped_when_published_then_newer_still_receives() {
    let bridge = CallbackBridge::new();
    let old = bridge.register();
    let mut new = bridge.register();

    drop(old);

    assert!(bridge.publish(OutOfBandCallback::new("code-4", None)));
    assert_eq!(new.try_recv().unwrap().code, "code-4");
}

#[test]
fn given_blank_id_token_when_callback_created_then_id_token_absent() {
    let callback = OutOfBandCallback::new("code", Some("   ".to_string()));

    assert_eq!(callback.id_token, None);
}
