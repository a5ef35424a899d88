use realty_client::entities::{
    AgentDraft, Appointment, Career, CareerDraft, Property, PropertySearch, Video,
};
use realty_client::{Completion, Status};
use serde_json::json;

use crate::support::{client, Backend};

#[tokio::test]
async fn json_resources_update_with_put() {
    let backend = Backend::new();
    backend.reply(
        "PUT",
        "careers/3",
        200,
        json!({ "id": 3, "title": "Surveyor", "department": "Ops", "open": true }),
    );
    let client = client(&backend.start().await);

    let draft = CareerDraft {
        title: "Surveyor".into(),
        department: "Ops".into(),
        open: true,
        ..CareerDraft::default()
    };
    let outcome = client.careers().update(&3, &draft).await.unwrap();
    assert!(outcome.is_success());

    let seen = backend.last();
    assert_eq!(seen.method, "PUT");
    assert!(seen.content_type.as_deref().unwrap().starts_with("application/json"));
    assert_eq!(seen.json.as_ref().unwrap()["title"], "Surveyor");

    // update on a key that was never listed leaves the list alone
    let items = client
        .store()
        .select::<Career, _>(|c| c.items().len())
        .unwrap();
    assert_eq!(items, 0);
}

#[tokio::test]
async fn multipart_resources_update_with_post() {
    let backend = Backend::new();
    backend.reply(
        "POST",
        "agents/5",
        200,
        json!({ "message": "Agent profile saved", "agent": { "id": 5, "name": "Ada", "role": "Broker" } }),
    );
    let client = client(&backend.start().await);

    let outcome = client
        .agents()
        .update(&5, &AgentDraft::new("Ada", "Broker", "Senior agent"))
        .await
        .unwrap();

    match outcome {
        realty_client::Outcome::Succeeded { message, .. } => {
            assert_eq!(message.as_deref(), Some("Agent profile saved"))
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    let seen = backend.last();
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.path, "/api/agents/5");
    assert!(seen.content_type.as_deref().unwrap().starts_with("multipart/form-data"));
}

#[tokio::test]
async fn list_then_delete_keeps_the_store_in_sync() {
    let backend = Backend::new();
    backend
        .reply(
            "GET",
            "videos",
            200,
            json!([
                { "id": 1, "title": "Tour", "url": "https://v.test/1" },
                { "id": 2, "title": "Launch", "url": "https://v.test/2" }
            ]),
        )
        .empty("DELETE", "videos/2", 204);
    let client = client(&backend.start().await);

    client.videos().list().await;
    let outcome = client.videos().delete(&2).await;
    assert_eq!(outcome.completion(), Some(&Completion::Deleted(2)));

    let videos = client.store().snapshot::<Video>().unwrap();
    assert_eq!(videos.items().len(), 1);
    assert_eq!(videos.items()[0].id, 1);
    assert_eq!(videos.status(), Status::Idle);
    assert_eq!(backend.hits("DELETE", "videos/2"), 1);
}

#[tokio::test]
async fn status_updates_put_id_and_status() {
    let backend = Backend::new();
    backend
        .reply(
            "GET",
            "appointments",
            200,
            json!({ "appointments": [
                { "id": 8, "name": "Tolu", "email": "t@mail.test", "date": "2026-11-02", "status": "pending" }
            ] }),
        )
        .reply(
            "PUT",
            "appointments/status",
            200,
            json!({ "id": 8, "name": "Tolu", "email": "t@mail.test", "date": "2026-11-02", "status": "confirmed" }),
        );
    let client = client(&backend.start().await);

    client.appointments().list().await;
    client.appointments().update_status(&8, "confirmed").await.unwrap();

    assert_eq!(backend.last().json, Some(json!({ "id": 8, "status": "confirmed" })));
    let status = client
        .store()
        .select::<Appointment, _>(|c| c.get(&8).map(|a| a.status.clone()))
        .unwrap();
    assert_eq!(status.as_deref(), Some("confirmed"));
}

#[tokio::test]
async fn search_sends_filters_and_is_remembered() {
    let backend = Backend::new();
    backend.reply(
        "GET",
        "properties/search",
        200,
        json!({ "properties": [
            { "id": 4, "title": "Duplex", "location": "Lekki", "price": 90000.0 }
        ] }),
    );
    let client = client(&backend.start().await);

    let search = PropertySearch::new().location("Lekki").bedrooms(2);
    let outcome = client.search_properties(&search).await;
    assert!(outcome.is_success());

    let seen = backend.last();
    assert_eq!(seen.query.as_deref(), Some("location=Lekki&bedrooms=2"));
    assert_eq!(seen.authorization, None);

    let saved = client.last_search().unwrap().unwrap();
    assert_eq!(saved.filters, search.filters());
    assert_eq!(saved.results.len(), 1);
    assert_eq!(saved.results[0].title, "Duplex");

    let (listed, found) = client
        .store()
        .select::<Property, _>(|c| (c.len(), c.results().len()))
        .unwrap();
    assert_eq!((listed, found), (0, 1));
}

#[tokio::test]
async fn failed_search_keeps_the_previous_one() {
    let backend = Backend::new();
    backend.reply("GET", "properties/search", 500, json!({}));
    let client = client(&backend.start().await);

    client
        .search_properties(&PropertySearch::new().location("Ikeja"))
        .await;

    assert_eq!(client.last_search().unwrap(), None);
}
