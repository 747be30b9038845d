mod common;

use axum::http::{StatusCode, header};
use serde_json::json;
use uuid::Uuid;

use common::{app, body_json, get, json_post, send, session_cookie};

#[tokio::test]
async fn cart_lives_in_the_session_across_requests() {
    let app = app();
    let product = Uuid::new_v4();
    let add = json!({ "id": product, "name": "Ferris Mug", "price": "9.99", "image": "mug.png" });

    let response = send(&app, json_post("/add-to-cart", None, add.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).expect("session cookie");
    assert!(cookie.starts_with("shop.sid="));
    assert_eq!(body_json(response).await, json!({ "success": true, "cartCount": 1 }));

    let response = send(&app, json_post("/add-to-cart", Some(&cookie), add)).await;
    assert_eq!(body_json(response).await["cartCount"], 1);

    let response = send(&app, get("/cart", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert_eq!(view["data"]["cart"][0]["quantity"], 2);
    assert_eq!(view["data"]["total"], "19.98");
    assert!(view["data"]["user"].is_null());

    let decrease = json!({ "id": product, "action": "decrease" });
    let response = send(&app, json_post("/update-cart", Some(&cookie), decrease.clone())).await;
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["cart"][0]["quantity"], 1);
    assert_eq!(body["total"], "9.99");

    let response = send(&app, json_post("/update-cart", Some(&cookie), decrease)).await;
    let body = body_json(response).await;
    assert_eq!(body["cart"], json!([]));
    assert_eq!(body["total"], "0");
}

#[tokio::test]
async fn separate_sessions_do_not_share_carts() {
    let app = app();
    let add = json!({ "id": Uuid::new_v4(), "name": "Hoodie", "price": 55, "image": "" });

    let response = send(&app, json_post("/add-to-cart", None, add)).await;
    assert!(session_cookie(&response).is_some());

    let response = send(&app, get("/cart", None)).await;
    let view = body_json(response).await;
    assert_eq!(view["data"]["cart"], json!([]));
}

#[tokio::test]
async fn update_on_missing_product_leaves_cart_unchanged() {
    let app = app();
    let product = Uuid::new_v4();
    let add = json!({ "id": product, "name": "Pin", "price": "1.50" });
    let response = send(&app, json_post("/add-to-cart", None, add)).await;
    let cookie = session_cookie(&response).expect("session cookie");

    for _ in 0..2 {
        let remove = json!({ "id": Uuid::new_v4(), "action": "remove" });
        let response = send(&app, json_post("/update-cart", Some(&cookie), remove)).await;
        let body = body_json(response).await;
        assert_eq!(body["cart"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["total"], "1.50");
    }
}

#[tokio::test]
async fn unknown_cart_action_is_rejected() {
    let app = app();
    let body = json!({ "id": Uuid::new_v4(), "action": "explode" });
    let response = send(&app, json_post("/update-cart", None, body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn gated_routes_redirect_anonymous_visitors_to_login() {
    let app = app();

    let checkout = axum::http::Request::post("/checkout")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(&app, checkout).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");

    let response = send(&app, get("/history", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn login_page_shows_no_user_and_no_message() {
    let response = send(&app(), get("/login", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert!(view["data"]["message"].is_null());
    assert!(view["data"]["user"].is_null());
}

#[tokio::test]
async fn logout_discards_the_cart() {
    let app = app();
    let add = json!({ "id": Uuid::new_v4(), "name": "Mug", "price": "12.00" });
    let response = send(&app, json_post("/add-to-cart", None, add)).await;
    let cookie = session_cookie(&response).expect("session cookie");

    let response = send(&app, get("/logout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let response = send(&app, get("/cart", Some(&cookie))).await;
    let view = body_json(response).await;
    assert_eq!(view["data"]["cart"], json!([]));
}

#[tokio::test]
async fn unknown_paths_get_a_json_404() {
    let response = send(&app(), get("/nope", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["data"]["path"], "/nope");
}
