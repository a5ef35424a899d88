use std::sync::Arc;

use realty_client::transport::HttpTransport;
use realty_client::{ClientConfig, CookieJar, RealtyClient};
use serde_json::json;

use crate::support::{client, Backend};

#[tokio::test]
async fn protected_reads_send_the_cookie_token() {
    let backend = Backend::new();
    backend.reply("GET", "agents", 200, json!([]));
    let client = client(&backend.start().await);
    client.cookies().set("auth_token", "abc123");

    client.agents().list().await;

    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn missing_cookie_sends_undefined() {
    let backend = Backend::new();
    backend.reply("GET", "meetings", 200, json!([]));
    let client = client(&backend.start().await);

    client.meetings().list().await;

    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer undefined"));
}

#[tokio::test]
async fn public_reads_send_no_credentials() {
    let backend = Backend::new();
    backend.reply("GET", "testimonials", 200, json!({ "testimonials": [] }));
    let client = client(&backend.start().await);
    client.cookies().set("auth_token", "abc123");

    let outcome = client.testimonials().list().await;

    assert!(outcome.is_success());
    assert_eq!(backend.last().authorization, None);
}

#[tokio::test]
async fn public_create_still_protects_status_updates() {
    let backend = Backend::new();
    backend
        .reply(
            "POST",
            "inquiries",
            201,
            json!({ "id": 1, "name": "Femi", "email": "femi@mail.test", "message": "Hi" }),
        )
        .reply(
            "PUT",
            "inquiries/status",
            200,
            json!({ "id": 1, "name": "Femi", "email": "femi@mail.test", "message": "Hi", "status": "read" }),
        );
    let client = client(&backend.start().await);
    client.cookies().set("auth_token", "admin");

    let draft = realty_client::entities::InquiryDraft::new("Femi", "femi@mail.test", "Hi");
    client.inquiries().create(&draft).await.unwrap();
    assert_eq!(backend.last().authorization, None);

    client.inquiries().update_status(&1, "read").await.unwrap();
    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer admin"));
}

#[tokio::test]
async fn cookie_name_is_configurable() {
    let backend = Backend::new();
    backend.reply("GET", "seminars", 200, json!([]));
    let config = ClientConfig::new(backend.start().await).with_auth_cookie("session");
    let client = RealtyClient::new(config).unwrap();
    client.cookies().set("auth_token", "ignored");
    client.cookies().set("session", "s-42");

    client.seminars().list().await;

    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer s-42"));
}

#[tokio::test]
async fn injected_transport_reads_the_shared_jar() {
    let backend = Backend::new();
    backend.reply("GET", "careers", 200, json!([]));
    let config = ClientConfig::new(backend.start().await);
    let jar = CookieJar::new();
    let http = HttpTransport::new(config.clone(), jar.clone()).unwrap();
    let client = RealtyClient::with_transport(config, Arc::new(http)).with_cookies(jar);
    client.cookies().set("auth_token", "shared");

    client.careers().list().await;

    assert_eq!(backend.last().authorization.as_deref(), Some("Bearer shared"));
}
