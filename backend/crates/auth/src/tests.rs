//! Use-case and HTTP tests for the auth crate, run against the in-memory store

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        AuthConfig, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, TokenService,
    };
    use crate::error::AuthError;
    use crate::infra::memory::MemoryAuthRepository;

    struct Fixture {
        repo: Arc<MemoryAuthRepository>,
        config: Arc<AuthConfig>,
        tokens: Arc<TokenService>,
    }

    fn fixture() -> Fixture {
        let config = Arc::new(AuthConfig::from_secret([5u8; 32]));
        Fixture {
            repo: Arc::new(MemoryAuthRepository::new()),
            tokens: Arc::new(TokenService::new(&config)),
            config,
        }
    }

    fn credentials(user_name: &str, password: &str) -> (Option<String>, Option<String>) {
        (Some(user_name.to_string()), Some(password.to_string()))
    }

    impl Fixture {
        async fn sign_up(&self, user_name: &str, password: &str) -> Result<(), AuthError> {
            let (user_name, password) = credentials(user_name, password);
            SignUpUseCase::new(self.repo.clone(), self.config.clone())
                .execute(SignUpInput {
                    user_name,
                    password,
                })
                .await
                .map(|_| ())
        }

        async fn sign_in(&self, user_name: &str, password: &str) -> Result<String, AuthError> {
            let (user_name, password) = credentials(user_name, password);
            SignInUseCase::new(self.repo.clone(), self.tokens.clone(), self.config.clone())
                .execute(SignInInput {
                    user_name,
                    password,
                })
                .await
                .map(|out| out.token)
        }
    }

    #[tokio::test]
    async fn test_sign_up_then_login_yields_verifiable_token() {
        let fx = fixture();
        fx.sign_up("alice", "s3cret").await.unwrap();

        let token = fx.sign_in("alice", "s3cret").await.unwrap();
        let identity = fx.tokens.verify(Some(&token)).unwrap();

        assert_eq!(identity.user_name, "alice");
    }

    #[tokio::test]
    async fn test_duplicate_user_name() {
        let fx = fixture();
        fx.sign_up("alice", "one").await.unwrap();

        let result = fx.sign_up("alice", "two").await;
        assert!(matches!(result, Err(AuthError::UserNameTaken)));

        // The rejected signup left the original record untouched
        assert!(fx.sign_in("alice", "one").await.is_ok());
        assert!(matches!(
            fx.sign_in("alice", "two").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_hashing_does_not_stall_the_runtime() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::{Duration, Instant};

        let fx = fixture();

        // A blocked worker would stall for at least one full hash
        let started = Instant::now();
        fx.sign_up("warmup", "pw").await.unwrap();
        let hash_time = started.elapsed();

        let done = Arc::new(AtomicBool::new(false));
        let ticker = tokio::spawn({
            let done = done.clone();
            async move {
                let mut last = Instant::now();
                let mut max_gap = Duration::ZERO;
                while !done.load(Ordering::Relaxed) {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                    max_gap = max_gap.max(last.elapsed());
                    last = Instant::now();
                }
                max_gap
            }
        });

        let (a, b, c) = tokio::join!(
            fx.sign_up("carol", "pw-1"),
            fx.sign_up("dave", "pw-2"),
            fx.sign_up("erin", "pw-3"),
        );
        a.unwrap();
        b.unwrap();
        c.unwrap();

        done.store(true, Ordering::Relaxed);
        let max_gap = ticker.await.unwrap();

        assert!(
            max_gap < hash_time,
            "runtime stalled for {max_gap:?} (one hash takes {hash_time:?})"
        );
    }

    #[tokio::test]
    async fn test_user_names_are_case_sensitive() {
        let fx = fixture();
        fx.sign_up("alice", "one").await.unwrap();
        fx.sign_up("Alice", "two").await.unwrap();

        assert!(fx.sign_in("Alice", "two").await.is_ok());
        assert!(matches!(
            fx.sign_in("Alice", "one").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_sign_ups_for_same_name() {
        let fx = fixture();

        let (a, b) = tokio::join!(fx.sign_up("bob", "pw-a"), fx.sign_up("bob", "pw-b"));

        let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_fail_identically() {
        let fx = fixture();
        fx.sign_up("alice", "s3cret").await.unwrap();

        let wrong_password = fx.sign_in("alice", "nope").await.unwrap_err();
        let unknown_user = fx.sign_in("nobody", "s3cret").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_missing_fields() {
        let fx = fixture();

        let result = SignUpUseCase::new(fx.repo.clone(), fx.config.clone())
            .execute(SignUpInput {
                user_name: Some("alice".to_string()),
                password: None,
            })
            .await;
        assert!(matches!(result, Err(AuthError::Validation(msg)) if msg == "Missing fields"));

        let result = fx.sign_up("", "pw").await;
        assert!(matches!(result, Err(AuthError::Validation(msg)) if msg == "Missing fields"));
    }
}

#[cfg(test)]
mod http_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use axum::{Extension, Json, Router, middleware};
    use tower::ServiceExt;

    use crate::application::{AuthConfig, TokenService};
    use crate::infra::memory::MemoryAuthRepository;
    use crate::presentation::middleware::{AuthMiddlewareState, require_identity};
    use crate::presentation::router::auth_router_generic;
    use kernel::identity::Identity;

    fn app() -> Router {
        let config = Arc::new(AuthConfig::from_secret([6u8; 32]));
        let tokens = Arc::new(TokenService::new(&config));

        let protected = Router::new()
            .route(
                "/whoami",
                get(|Extension(identity): Extension<Identity>| async move { Json(identity) }),
            )
            .route_layer(middleware::from_fn_with_state(
                AuthMiddlewareState::new(tokens.clone()),
                require_identity,
            ));

        auth_router_generic(MemoryAuthRepository::new(), config, tokens).merge(protected)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn whoami(authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_signup_login_and_protected_route() {
        let app = app();
        let creds = serde_json::json!({"username": "alice", "password": "pw"});

        let response = app
            .clone()
            .oneshot(post_json("/signup", creds.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "User created"})
        );

        let response = app
            .clone()
            .oneshot(post_json("/login", creds))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(whoami(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["userName"], "alice");
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_bad_request() {
        let app = app();
        let creds = serde_json::json!({"username": "alice", "password": "pw"});

        app.clone()
            .oneshot(post_json("/signup", creds.clone()))
            .await
            .unwrap();
        let response = app.oneshot(post_json("/signup", creds)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Username taken"})
        );
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let response = app()
            .oneshot(post_json("/signup", serde_json::json!({"username": "alice"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Missing fields"})
        );
    }

    #[tokio::test]
    async fn test_bad_login_is_unauthorized() {
        let response = app()
            .oneshot(post_json(
                "/login",
                serde_json::json!({"username": "ghost", "password": "pw"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid credentials"})
        );
    }

    #[tokio::test]
    async fn test_missing_token() {
        let response = app().oneshot(whoami(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Unauthorized"})
        );
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let response = app()
            .oneshot(whoami(Some("Bearer not-a-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid token"})
        );
    }

    #[tokio::test]
    async fn test_malformed_json_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/signup")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }
}
