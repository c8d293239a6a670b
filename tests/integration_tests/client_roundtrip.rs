//! Client integration tests
//!
//! The typed client talks to a real server bound on a loopback port.

use std::net::SocketAddr;
use std::time::Duration;

use fitcoach::client::{CatalogClient, ClientConfig, ClientError};
use fitcoach::landing::LandingRenderer;
use tokio::net::TcpListener;

use super::fixtures::FEATURED_COACH_IDS;
use crate::common::test_router;

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, test_router()).await.unwrap();
    });

    addr
}

async fn client() -> CatalogClient {
    let addr = spawn_server().await;
    let config = ClientConfig::new(format!("http://{addr}/api"))
        .with_timeout(Duration::from_secs(5))
        .with_retry_count(0);
    CatalogClient::new(config).unwrap()
}

#[tokio::test]
async fn test_client_coach_operations() {
    let client = client().await;

    let all = client.coaches().await.unwrap();
    assert_eq!(all.len(), 5);

    let featured = client.featured_coaches().await.unwrap();
    let ids: Vec<i64> = featured.iter().map(|c| i64::from(c.id)).collect();
    assert_eq!(ids, FEATURED_COACH_IDS.to_vec());

    let coach = client.coach(5).await.unwrap().unwrap();
    assert_eq!(coach.name, "Jake \"Titan\" Thompson");
    assert!(client.coach(2).await.unwrap().is_none());

    let matched = client
        .coaches_by_specialization("Scientific Training")
        .await
        .unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 4);

    assert_eq!(client.available_coaches().await.unwrap().len(), 5);

    let top: Vec<i32> = client
        .top_rated_coaches()
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(top, vec![1, 4, 6, 3, 5]);
}

#[tokio::test]
async fn test_client_program_operations() {
    let client = client().await;

    assert_eq!(client.programs().await.unwrap().len(), 4);
    assert_eq!(client.featured_programs().await.unwrap().len(), 3);

    let program = client.program(4).await.unwrap().unwrap();
    assert_eq!(program.goal, "Strength & Hypertrophy");
    assert!(client.program(99).await.unwrap().is_none());

    let expert = client.programs_by_difficulty("expert").await.unwrap();
    assert_eq!(expert.len(), 1);
    assert_eq!(expert[0].id, 2);

    let owned = client.programs_by_coach(4).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, 4);

    let figure = client.programs_by_goal("Figure").await.unwrap();
    assert_eq!(figure[0].id, 3);

    let priced: Vec<i32> = client
        .programs_by_price_range(200.0, 300.0)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(priced, vec![1, 3]);
}

#[tokio::test]
async fn test_client_surfaces_bad_request() {
    let client = client().await;

    let err = client.programs_by_coach(-1).await.unwrap_err();
    match err {
        ClientError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Coach ID must be greater than 0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_client_health() {
    let client = client().await;

    let health = client.health().await.unwrap();
    assert!(health.healthy);
    assert_eq!(health.environment, "Development");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}/api"))
        .with_retry_count(1)
        .with_retry_delay(Duration::from_millis(10));
    let client = CatalogClient::new(config).unwrap();

    let err = client.coaches().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn test_landing_from_live_server() {
    let client = client().await;
    let coaches = client.featured_coaches().await.unwrap();

    let markdown = LandingRenderer::new().unwrap().render(&coaches).unwrap();
    assert!(markdown.contains("### Marcus Steel"));
    assert!(markdown.contains("### Amanda Force"));
    assert!(markdown.contains("## Why Choose Us?"));
}
