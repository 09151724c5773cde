//! End-to-end tests against the fully assembled router (in-memory stores)

use api::in_memory_app;
use auth::AuthConfig;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use review::ReviewConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    in_memory_app(AuthConfig::from_secret([42u8; 32]), ReviewConfig::default())
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn sign_up_and_login(app: &Router, username: &str, password: &str) -> String {
    let creds = json!({"username": username, "password": password});

    let (status, body) = call(app, "POST", "/api/signup", None, Some(creds.clone())).await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");

    let (status, body) = call(app, "POST", "/api/login", None, Some(creds)).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = call(&app(), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_review_and_rating_scenario() {
    let app = app();

    // A signs up, logs in, posts a review
    let token_a = sign_up_and_login(&app, "reader_a", "pw-a").await;
    let (status, body) = call(
        &app,
        "POST",
        "/api/reviews",
        Some(&token_a),
        Some(json!({
            "title": "Dune",
            "author": "Herbert",
            "review": "A desert planet and a lot of politics.",
            "rating": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Review added"}));

    // The listing shows it with A's username
    let (status, listed) = call(&app, "GET", "/api/reviews", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let review = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["title"] == "Dune")
        .expect("review listed");
    assert_eq!(review["username"], "reader_a");
    assert_eq!(review["author"], "Herbert");
    let review_id = review["id"].as_str().unwrap().to_string();

    // B rates that review's book 4
    let token_b = sign_up_and_login(&app, "reader_b", "pw-b").await;
    let (status, body) = call(
        &app,
        "POST",
        "/api/rate-book",
        Some(&token_b),
        Some(json!({"bookId": review_id, "rating": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Rating saved"}));

    // Average is visible immediately
    let (status, averages) = call(&app, "GET", "/api/book-avg-ratings", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(averages[review_id.as_str()], "4.00");

    // B cannot edit A's review
    let (status, body) = call(
        &app,
        "PUT",
        &format!("/api/reviews/{}", review_id),
        Some(&token_b),
        Some(json!({"title": "Not Dune"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"error": "Forbidden"}));

    // B's ratings and A's reviews are scoped to each caller
    let (_, ratings_b) = call(&app, "GET", "/api/user-book-ratings", Some(&token_b), None).await;
    assert_eq!(ratings_b, json!({ review_id.clone(): 4 }));

    let (_, mine_b) = call(&app, "GET", "/api/my-reviews", Some(&token_b), None).await;
    assert_eq!(mine_b, json!([]));

    let (_, mine_a) = call(&app, "GET", "/api/my-reviews", Some(&token_a), None).await;
    assert_eq!(mine_a.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rerating_replaces_and_averages_round() {
    let app = app();
    let token_a = sign_up_and_login(&app, "a", "pw").await;
    let token_b = sign_up_and_login(&app, "b", "pw").await;
    let token_c = sign_up_and_login(&app, "c", "pw").await;

    call(
        &app,
        "POST",
        "/api/reviews",
        Some(&token_a),
        Some(json!({"title": "Emma", "author": "Austen", "review": "Witty.", "rating": 4})),
    )
    .await;
    let (_, listed) = call(&app, "GET", "/api/reviews?page=1", None, None).await;
    let book_id = listed[0]["id"].as_str().unwrap().to_string();

    for (token, rating) in [(&token_a, 1), (&token_b, 3), (&token_c, 4), (&token_a, 3)] {
        let (status, _) = call(
            &app,
            "POST",
            "/api/rate-book",
            Some(token),
            Some(json!({"bookId": book_id, "rating": rating})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // (3 + 3 + 4) / 3 = 3.333..
    let (_, averages) = call(&app, "GET", "/api/book-avg-ratings", None, None).await;
    assert_eq!(averages, json!({ book_id.clone(): "3.33" }));
}

#[tokio::test]
async fn test_error_envelope() {
    let app = app();

    let (status, body) = call(
        &app,
        "POST",
        "/api/reviews",
        None,
        Some(json!({"title": "x", "author": "y", "review": "z", "rating": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Unauthorized"}));

    let (status, body) = call(
        &app,
        "POST",
        "/api/login",
        None,
        Some(json!({"username": "nobody", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid credentials"}));

    let token = sign_up_and_login(&app, "writer", "pw").await;
    let (status, body) = call(
        &app,
        "POST",
        "/api/reviews",
        Some(&token),
        Some(json!({"title": "Dune", "author": "Herbert", "review": "Sand."})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields"}));
}

#[tokio::test]
async fn test_pages_past_the_end_are_empty() {
    let app = app();
    let token = sign_up_and_login(&app, "prolific", "pw").await;

    for i in 0..11 {
        call(
            &app,
            "POST",
            "/api/reviews",
            Some(&token),
            Some(json!({"title": format!("Book {i}"), "author": "Anon", "review": "Fine.", "rating": 3})),
        )
        .await;
    }

    let (_, page1) = call(&app, "GET", "/api/reviews", None, None).await;
    let (_, page2) = call(&app, "GET", "/api/reviews?page=2", None, None).await;
    let (_, page9) = call(&app, "GET", "/api/reviews?page=9", None, None).await;

    assert_eq!(page1.as_array().unwrap().len(), 10);
    assert_eq!(page2.as_array().unwrap().len(), 1);
    assert_eq!(page9, json!([]));
}
