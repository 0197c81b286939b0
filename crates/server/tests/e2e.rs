use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;
use service::auth::TokenService;
use service::bookings::repository::mock::InMemoryBookingRepository;
use service::listings::repository::mock::InMemoryListingRepository;
use service::listings::ServiceListing;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let listings = vec![
        ServiceListing::new(Uuid::new_v4(), "Oil Change", 30.0),
        ServiceListing::new(Uuid::new_v4(), "Wheel Alignment", 65.0),
    ];
    let state = ServerState::new(
        TokenService::new("test-secret", chrono::Duration::hours(1)),
        Arc::new(InMemoryListingRepository::new(listings)),
        Arc::new(InMemoryBookingRepository::default()),
    );

    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_liveness() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Car Doctor Server is Running");

    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_cors_allows_any_origin() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/services", app.base_url))
        .header("Origin", "http://localhost:5173")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().contains_key("access-control-allow-origin"));
    Ok(())
}

#[tokio::test]
async fn e2e_customer_books_and_reviews() -> anyhow::Result<()> {
    let app = start_server().await?;
    let http = client();
    let email = format!("user_{}@example.com", Uuid::new_v4());

    // Browse
    let services: Vec<Value> = http
        .get(format!("{}/services?searchText=oil", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(services.len(), 1);
    let service_id = services[0]["_id"].as_str().unwrap().to_string();

    let one: Value = http.get(format!("{}/services/{}", app.base_url, service_id)).send().await?.json().await?;
    assert_eq!(one["title"], json!("Oil Change"));

    // Book
    let res = http
        .post(format!("{}/bookings", app.base_url))
        .json(&json!({"email": email, "service_id": service_id, "date": "2024-06-01"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let ack: Value = res.json().await?;
    let booking_id = ack["insertedId"].as_str().unwrap().to_string();

    // Token
    let token: Value = http.post(format!("{}/jwt", app.base_url)).json(&json!({"email": email})).send().await?.json().await?;
    let token = token["token"].as_str().unwrap().to_string();

    // Review own bookings
    let res = http
        .get(format!("{}/bookings", app.base_url))
        .query(&[("email", email.as_str())])
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let mine: Vec<Value> = res.json().await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["_id"], json!(booking_id));
    assert_eq!(mine[0]["date"], json!("2024-06-01"));

    // Someone else's bookings
    let res = http
        .get(format!("{}/bookings", app.base_url))
        .query(&[("email", "other@example.com")])
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::FORBIDDEN);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"error": true, "message": "Forbidden access"}));

    // No token
    let res = http.get(format!("{}/bookings", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    // Confirm then cancel
    let ack: Value = http
        .patch(format!("{}/booking/{}", app.base_url, booking_id))
        .json(&json!({"status": "confirmed"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(ack["modifiedCount"], json!(1));

    let ack: Value = http.delete(format!("{}/booking/{}", app.base_url, booking_id)).send().await?.json().await?;
    assert_eq!(ack["deletedCount"], json!(1));
    Ok(())
}
