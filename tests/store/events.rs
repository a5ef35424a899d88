use std::sync::{Arc, Mutex};

use realty_client::entities::{Inquiry, InquiryDraft};
#[cfg(feature = "emitter")]
use realty_client::notify::{EmitterSink, Toast, Toaster};
use realty_client::{ClientConfig, OperationKind, Phase, RealtyClient, StoreEvent, ValidationError};
use serde_json::json;

use crate::support::Gated;

fn recorder() -> (Arc<Mutex<Vec<StoreEvent>>>, Arc<dyn realty_client::Subscriber>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let subscriber: Arc<dyn realty_client::Subscriber> =
        Arc::new(move |event: &StoreEvent| sink.lock().unwrap().push(event.clone()));
    (events, subscriber)
}

fn client(transport: Arc<Gated>) -> RealtyClient {
    RealtyClient::with_transport(ClientConfig::new("http://backend.test"), transport)
}

#[tokio::test]
async fn each_operation_publishes_requested_then_terminal() {
    let transport = Gated::new();
    transport
        .gate()
        .send(Ok(json!({ "inquiries": [
            { "id": 1, "name": "Femi", "email": "f@mail.test", "message": "Hi" }
        ] })))
        .unwrap();
    let client = client(transport.clone());
    let (events, subscriber) = recorder();
    client.subscribe(subscriber);

    client.inquiries().list().await;

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].phase, Phase::Requested);
    assert_eq!(events[1].phase, Phase::Succeeded { message: None });
    assert_eq!(events[0].op, events[1].op);
    assert_eq!(events[1].label, "Inquiry");
    assert!(events[1].applied);
}

#[tokio::test]
async fn unsubscribed_observers_hear_nothing() {
    let transport = Gated::new();
    transport.gate().send(Ok(json!({ "inquiries": [] }))).unwrap();
    let client = client(transport.clone());
    let (events, subscriber) = recorder();
    let id = client.subscribe(subscriber);

    assert!(client.unsubscribe(id));
    client.inquiries().list().await;

    assert!(events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejected_drafts_publish_without_a_request() {
    let transport = Gated::new();
    let client = client(transport.clone());
    let (events, subscriber) = recorder();
    client.subscribe(subscriber);

    let err = client
        .inquiries()
        .create(&InquiryDraft::new("Femi", "", "Hi"))
        .await
        .unwrap_err();

    assert_eq!(err, ValidationError::MissingField("email"));
    assert!(transport.requests().is_empty());
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind(), OperationKind::Create);
    assert_eq!(
        events[0].phase,
        Phase::Rejected {
            message: "email is required".into()
        }
    );
    assert!(!events[0].applied);
    assert!(client.store().snapshot::<Inquiry>().unwrap().is_empty());
}

#[tokio::test]
async fn status_update_without_status_is_rejected() {
    let transport = Gated::new();
    let client = client(transport.clone());

    let err = client.inquiries().update_status(&1, " ").await.unwrap_err();

    assert_eq!(err, ValidationError::MissingField("status"));
    assert!(transport.requests().is_empty());
}

#[cfg(feature = "emitter")]
#[tokio::test]
async fn toasts_reach_emitter_listeners() {
    use std::thread;
    use std::time::Duration;

    let transport = Gated::new();
    transport
        .gate()
        .send(Err(realty_client::TransportError::Status {
            status: 500,
            message: Some("Database offline".into()),
        }))
        .unwrap();
    let client = client(transport.clone());

    let sink = EmitterSink::default();
    let received = Arc::new(Mutex::new(Vec::new()));
    {
        let received = received.clone();
        sink.on(move |payload: String| received.lock().unwrap().push(payload));
    }
    client.subscribe(Arc::new(Toaster::new(sink)));

    client.inquiries().fetch_one(&3).await;

    // EventEmitter is async, give it time
    thread::sleep(Duration::from_millis(50));
    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let toast: Toast = serde_json::from_str(&received[0]).unwrap();
    assert_eq!(toast, Toast::error("inquiries", "Database offline"));
}
