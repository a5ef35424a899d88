use realty_client::entities::{AgentDraft, Property, PropertyDraft, SubmissionDraft};
use realty_client::transport::Attachment;
use serde_json::json;

use crate::support::{client, Backend};

#[tokio::test]
async fn agent_files_use_backend_field_names() {
    let backend = Backend::new();
    backend.reply(
        "POST",
        "agents",
        201,
        json!({ "agent": { "id": 1, "name": "Ada", "role": "Broker", "description": "Senior agent" } }),
    );
    let client = client(&backend.start().await);

    let draft = AgentDraft::new("Ada", "Broker", "Senior agent")
        .with_image(Attachment::new("ada.png", vec![1, 2, 3]))
        .with_certificate(Attachment::new("license.pdf", vec![4]))
        .with_certificate(Attachment::new("award.pdf", vec![5]));
    let outcome = client.agents().create(&draft).await.unwrap();
    assert!(outcome.is_success());

    let seen = backend.last();
    assert_eq!(
        seen.field_names(),
        vec!["name", "role", "description", "image", "certificates[0]", "certificates[1]"]
    );
    assert_eq!(seen.field("name").unwrap().text.as_deref(), Some("Ada"));
    assert_eq!(
        seen.field("certificates[1]").unwrap().file_name.as_deref(),
        Some("award.pdf")
    );
}

#[tokio::test]
async fn property_amenities_are_nested_records() {
    let backend = Backend::new();
    backend.reply(
        "POST",
        "properties",
        201,
        json!({
            "message": "Property listed",
            "property": { "id": 9, "title": "Loft", "location": "Yaba",
                          "amenities": [{ "name": "Pool" }, { "name": "Gym" }] }
        }),
    );
    let client = client(&backend.start().await);

    let draft = PropertyDraft::new("Loft", "Yaba")
        .with_image(Attachment::new("front.jpg", vec![0]))
        .with_amenity("Pool")
        .with_amenity("Gym");
    client.properties().create(&draft).await.unwrap();

    let seen = backend.last();
    assert_eq!(seen.field("images[0]").unwrap().file_name.as_deref(), Some("front.jpg"));
    assert_eq!(seen.field("amenities[0][name]").unwrap().text.as_deref(), Some("Pool"));
    assert_eq!(seen.field("amenities[1][name]").unwrap().text.as_deref(), Some("Gym"));

    let created = client
        .store()
        .select::<Property, _>(|c| c.items().to_vec())
        .unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].amenities.len(), 2);
}

#[tokio::test]
async fn client_submissions_are_public_multipart() {
    let backend = Backend::new();
    backend.reply(
        "POST",
        "client-properties",
        201,
        json!({ "id": 3, "name": "Bisi", "phone": "0800", "location": "Ajah", "status": "pending" }),
    );
    let client = client(&backend.start().await);

    let draft = SubmissionDraft::new("Bisi", "0800", "Ajah")
        .with_image(Attachment::new("plot.jpeg", vec![7]));
    client.client_properties().create(&draft).await.unwrap();

    let seen = backend.last();
    assert_eq!(seen.authorization, None);
    assert!(seen.content_type.as_deref().unwrap().starts_with("multipart/form-data"));
    assert_eq!(seen.field_names(), vec!["name", "phone", "location", "images[0]"]);
}
