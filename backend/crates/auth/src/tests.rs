//! Router-level tests for the auth crate over in-memory repositories

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use axum::{Router, middleware};
use chrono::{Duration, Utc};
use kernel::auth::AuthenticatedUser;
use kernel::id::{SessionId, UserId};
use platform::password::ClearTextPassword;
use tower::ServiceExt;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};
use crate::presentation::router::auth_router_generic;

const EMAIL: &str = "owner@example.com";
const PASSWORD: &str = "correct horse battery";

#[derive(Clone, Default)]
struct FakeAuthRepo {
    users: Arc<Mutex<Vec<User>>>,
    sessions: Arc<Mutex<HashMap<SessionId, AuthSession>>>,
    fail_sessions: bool,
}

impl FakeAuthRepo {
    fn with_user() -> (Self, UserId) {
        let repo = Self::default();
        let user_id = UserId::new();
        let password_hash = ClearTextPassword::new(PASSWORD.to_string())
            .unwrap()
            .hash()
            .unwrap();

        repo.users.lock().unwrap().push(User {
            user_id,
            email: Email::new(EMAIL).unwrap(),
            password_hash,
            created_at: Utc::now(),
        });

        (repo, user_id)
    }

    fn insert_session(&self, session: AuthSession) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session);
    }

    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

impl UserRepository for FakeAuthRepo {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

impl AuthSessionRepository for FakeAuthRepo {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.insert_session(session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: SessionId) -> AuthResult<Option<AuthSession>> {
        if self.fail_sessions {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(self.sessions.lock().unwrap().get(&session_id).cloned())
    }

    async fn delete(&self, session_id: SessionId) -> AuthResult<bool> {
        if self.fail_sessions {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(self.sessions.lock().unwrap().remove(&session_id).is_some())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

fn config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::development())
}

fn protected_app(repo: FakeAuthRepo, config: Arc<AuthConfig>) -> Router {
    async fn whoami(user: AuthenticatedUser) -> String {
        user.user_id.to_string()
    }

    Router::new()
        .route("/me", get(whoami))
        .route_layer(middleware::from_fn_with_state(
            AuthMiddlewareState::new(repo, config),
            require_auth::<FakeAuthRepo>,
        ))
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn login_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().unwrap().to_string())
}

#[cfg(test)]
mod login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_sets_cookie_and_creates_session() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let app = auth_router_generic(repo.clone(), config());

        let response = app
            .oneshot(login_request(serde_json::json!({
                "email": "Owner@Example.com",
                "password": PASSWORD,
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = set_cookie(&response).unwrap();
        assert!(cookie.starts_with("auth-token="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains(&format!("Max-Age={}", 168 * 3600)));
        assert!(!cookie.contains("Secure"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "로그인되었습니다.");
        assert_eq!(body["userId"], user_id.to_string());
        assert_eq!(repo.session_count(), 1);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let (repo, _) = FakeAuthRepo::with_user();

        for body in [
            serde_json::json!({ "email": EMAIL, "password": "wrong" }),
            serde_json::json!({ "email": "nobody@example.com", "password": PASSWORD }),
            serde_json::json!({ "email": "not-an-email", "password": PASSWORD }),
        ] {
            let app = auth_router_generic(repo.clone(), config());
            let response = app.oneshot(login_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert!(set_cookie(&response).is_none());
            let body = body_json(response).await;
            assert_eq!(body["error"], crate::error::INVALID_CREDENTIALS);
        }
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_request() {
        let (repo, _) = FakeAuthRepo::with_user();

        for body in [
            serde_json::json!({ "email": EMAIL }),
            serde_json::json!({ "email": "  ", "password": PASSWORD }),
            serde_json::json!({}),
        ] {
            let app = auth_router_generic(repo.clone(), config());
            let response = app.oneshot(login_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}

#[cfg(test)]
mod logout_tests {
    use super::*;

    fn logout_request(cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/logout");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_logout_without_session_still_clears_cookie() {
        let app = auth_router_generic(FakeAuthRepo::default(), config());

        let response = app.oneshot(logout_request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            set_cookie(&response).unwrap(),
            "auth-token=; HttpOnly; Path=/; Max-Age=0; \
             Expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Lax"
        );
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({ "success": true, "message": "로그아웃되었습니다." })
        );
    }

    #[tokio::test]
    async fn test_logout_deletes_session() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let config = config();
        let session = AuthSession::new(user_id, Duration::hours(1));
        let token = token::issue(&config.session_secret, session.session_id);
        repo.insert_session(session);

        let app = auth_router_generic(repo.clone(), config);
        let response = app
            .oneshot(logout_request(Some(&format!("auth-token={token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_ignores_repository_failure() {
        let repo = FakeAuthRepo {
            fail_sessions: true,
            ..Default::default()
        };
        let config = config();
        let token = token::issue(&config.session_secret, SessionId::new());

        let app = auth_router_generic(repo, config);
        let response = app
            .oneshot(logout_request(Some(&format!("auth-token={token}"))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookie(&response).unwrap().contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_secure_flag_in_production() {
        let config = Arc::new(AuthConfig::for_environment(
            platform::config::Environment::Production,
            [3u8; 32],
            std::time::Duration::from_secs(3600),
        ));
        let app = auth_router_generic(FakeAuthRepo::default(), config);

        let response = app.oneshot(logout_request(None)).await.unwrap();
        assert!(set_cookie(&response).unwrap().ends_with("; Secure"));
    }
}

#[cfg(test)]
mod middleware_tests {
    use super::*;

    fn me_request(credential: Option<(header::HeaderName, String)>) -> Request<Body> {
        let mut builder = Request::builder().uri("/me");
        if let Some((name, value)) = credential {
            builder = builder.header(name, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn live_session(repo: &FakeAuthRepo, config: &AuthConfig, user_id: UserId) -> String {
        let session = AuthSession::new(user_id, Duration::hours(1));
        let token = token::issue(&config.session_secret, session.session_id);
        repo.insert_session(session);
        token
    }

    async fn assert_rejected(response: Response) {
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()["x-auth-required"], "true");
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "인증이 필요합니다." }));
    }

    #[tokio::test]
    async fn test_missing_token_rejected() {
        let app = protected_app(FakeAuthRepo::default(), config());
        let response = app.oneshot(me_request(None)).await.unwrap();
        assert_rejected(response).await;
    }

    #[tokio::test]
    async fn test_cookie_resolves_identity() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let config = config();
        let token = live_session(&repo, &config, user_id);

        let app = protected_app(repo, config);
        let response = app
            .oneshot(me_request(Some((header::COOKIE, format!("auth-token={token}")))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, user_id.to_string());
    }

    #[tokio::test]
    async fn test_bearer_header_resolves_identity() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let config = config();
        let token = live_session(&repo, &config, user_id);

        let app = protected_app(repo, config);
        let response = app
            .oneshot(me_request(Some((
                header::AUTHORIZATION,
                format!("Bearer {token}"),
            ))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_rejected() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let token = live_session(&repo, &AuthConfig::development(), user_id);

        let app = protected_app(repo, config());
        let response = app
            .oneshot(me_request(Some((header::COOKIE, format!("auth-token={token}")))))
            .await
            .unwrap();

        assert_rejected(response).await;
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_removed() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let config = config();
        let session = AuthSession::new(user_id, Duration::seconds(-5));
        let token = token::issue(&config.session_secret, session.session_id);
        repo.insert_session(session);

        let app = protected_app(repo.clone(), config);
        let response = app
            .oneshot(me_request(Some((header::COOKIE, format!("auth-token={token}")))))
            .await
            .unwrap();

        assert_rejected(response).await;
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_repository_failure_rejected() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        let config = config();
        let token = live_session(&repo, &config, user_id);
        let repo = FakeAuthRepo {
            fail_sessions: true,
            ..repo
        };

        let app = protected_app(repo, config);
        let response = app
            .oneshot(me_request(Some((header::COOKIE, format!("auth-token={token}")))))
            .await
            .unwrap();

        assert_rejected(response).await;
    }

    #[tokio::test]
    async fn test_cleanup_expired_sessions() {
        let (repo, user_id) = FakeAuthRepo::with_user();
        repo.insert_session(AuthSession::new(user_id, Duration::seconds(-1)));
        repo.insert_session(AuthSession::new(user_id, Duration::hours(1)));

        assert_eq!(repo.cleanup_expired().await.unwrap(), 1);
        assert_eq!(repo.session_count(), 1);
    }
}
