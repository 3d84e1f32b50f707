mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{body_json, get_with_bearer, json_post, register_user, setup_app, test_state};

#[tokio::test]
async fn test_signup_success() {
    let app = setup_app(test_state());

    let response = app
        .oneshot(json_post(
            "/api/auth/signup",
            json!({"username": "lab-tech", "password": "soil-mechanics-42"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["username"], "lab-tech");
    assert_eq!(body["roles"][0], "user");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let state = test_state();
    register_user(&state, "lab-tech", "soil-mechanics-42");
    let app = setup_app(state);

    let response = app
        .oneshot(json_post(
            "/api/auth/signup",
            json!({"username": "lab-tech", "password": "another-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_short_password_rejected() {
    let app = setup_app(test_state());

    let response = app
        .oneshot(json_post(
            "/api/auth/signup",
            json!({"username": "lab-tech", "password": "short"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success_returns_pair() {
    let state = test_state();
    register_user(&state, "lab-tech", "soil-mechanics-42");
    let app = setup_app(state);

    let response = app
        .oneshot(json_post(
            "/api/auth/login",
            json!({"username": "lab-tech", "password": "soil-mechanics-42"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_ne!(body["access_token"], body["refresh_token"]);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let state = test_state();
    register_user(&state, "lab-tech", "soil-mechanics-42");
    let app = setup_app(state);

    let response = app
        .oneshot(json_post(
            "/api/auth/login",
            json!({"username": "lab-tech", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_same_rejection() {
    let app = setup_app(test_state());

    let response = app
        .oneshot(json_post(
            "/api/auth/login",
            json!({"username": "nobody", "password": "whatever-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_refresh_issues_working_pair() {
    let state = test_state();
    register_user(&state, "lab-tech", "soil-mechanics-42");
    let app = setup_app(state);

    let login = app
        .clone()
        .oneshot(json_post(
            "/api/auth/login",
            json!({"username": "lab-tech", "password": "soil-mechanics-42"}),
        ))
        .await
        .unwrap();
    let pair = body_json(login).await;

    let refreshed = app
        .clone()
        .oneshot(json_post(
            "/api/auth/refresh",
            json!({"refresh_token": pair["refresh_token"]}),
        ))
        .await
        .unwrap();
    assert_eq!(refreshed.status(), StatusCode::OK);
    let new_pair = body_json(refreshed).await;

    // The fresh access token authenticates
    let me = app
        .oneshot(get_with_bearer(
            "/api/auth/me",
            new_pair["access_token"].as_str().unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    let body = body_json(me).await;
    assert_eq!(body["username"], "lab-tech");
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let state = test_state();
    register_user(&state, "lab-tech", "soil-mechanics-42");
    let app = setup_app(state);

    let login = app
        .clone()
        .oneshot(json_post(
            "/api/auth/login",
            json!({"username": "lab-tech", "password": "soil-mechanics-42"}),
        ))
        .await
        .unwrap();
    let pair = body_json(login).await;

    let response = app
        .oneshot(json_post(
            "/api/auth/refresh",
            json!({"refresh_token": pair["access_token"]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_garbage() {
    let app = setup_app(test_state());

    let response = app
        .oneshot(json_post(
            "/api/auth/refresh",
            json!({"refresh_token": "not-a-token"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_acknowledges() {
    let app = setup_app(test_state());

    let response = app
        .oneshot(json_post("/api/auth/logout", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Logged out");
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = setup_app(test_state());

    let signup = app
        .clone()
        .oneshot(json_post(
            "/api/auth/signup",
            json!({"username": "engineer", "password": "triaxial-test-99"}),
        ))
        .await
        .unwrap();
    assert_eq!(signup.status(), StatusCode::CREATED);

    let login = app
        .clone()
        .oneshot(json_post(
            "/api/auth/login",
            json!({"username": "engineer", "password": "triaxial-test-99"}),
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::OK);
    let pair = body_json(login).await;

    let me = app
        .oneshot(get_with_bearer(
            "/api/auth/me",
            pair["access_token"].as_str().unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    let body = body_json(me).await;
    assert_eq!(body["username"], "engineer");
}
