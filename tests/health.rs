mod common;

use axum::extract::State;
use shop_online::routes::health::health_check;

#[tokio::test]
async fn health_check_reports_unreachable_database() {
    let response = health_check(State(common::lazy_state())).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.database, "down");
}
