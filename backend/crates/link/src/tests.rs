//! Router-level tests for the link crate over an in-memory repository

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use chrono::{Duration, Utc};
use kernel::id::ShortenedUrlId;
use tower::ServiceExt;

use crate::application::config::LinkConfig;
use crate::domain::entities::ShortenedUrl;
use crate::domain::repository::LinkRepository;
use crate::error::LinkResult;
use crate::presentation::router::link_router_generic;

#[derive(Clone, Default)]
struct FakeLinkRepo {
    rows: Arc<Mutex<Vec<ShortenedUrl>>>,
    fail_clicks: bool,
}

impl FakeLinkRepo {
    fn insert(&self, short_code: &str, custom_code: Option<&str>, expires_in: Option<Duration>) {
        self.rows.lock().unwrap().push(ShortenedUrl {
            url_id: ShortenedUrlId::new(),
            short_code: short_code.to_string(),
            custom_code: custom_code.map(str::to_string),
            original_url: format!("https://example.com/{short_code}"),
            expires_at: expires_in.map(|d| Utc::now() + d),
            click_count: 0,
            created_at: Utc::now(),
        });
    }

    fn clicks(&self, short_code: &str) -> i64 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == short_code)
            .map(|l| l.click_count)
            .unwrap()
    }
}

impl LinkRepository for FakeLinkRepo {
    async fn find_by_code(&self, code: &str) -> LinkResult<Option<ShortenedUrl>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|l| l.short_code == code)
            .or_else(|| rows.iter().find(|l| l.custom_code.as_deref() == Some(code)))
            .cloned())
    }

    async fn record_click(&self, url_id: ShortenedUrlId) -> LinkResult<()> {
        if self.fail_clicks {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        if let Some(link) = self
            .rows
            .lock()
            .unwrap()
            .iter_mut()
            .find(|l| l.url_id == url_id)
        {
            link.click_count += 1;
        }
        Ok(())
    }
}

fn app(repo: FakeLinkRepo) -> Router {
    link_router_generic(
        repo,
        LinkConfig {
            base_url: "https://sho.rt".to_string(),
            ..Default::default()
        },
    )
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[cfg(test)]
mod qr_tests {
    use super::*;

    #[tokio::test]
    async fn test_qr_redirects_to_chart_endpoint() {
        let repo = FakeLinkRepo::default();
        repo.insert("abc123", None, None);

        let response = get(app(repo), "/api/qr/abc123").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            location(&response),
            "https://chart.googleapis.com/chart?cht=qr&chs=300x300&chl=https%3A%2F%2Fsho.rt%2Fabc123"
        );
    }

    #[tokio::test]
    async fn test_custom_code_only_match() {
        let repo = FakeLinkRepo::default();
        repo.insert("abc123", Some("my-brand"), None);

        let response = get(app(repo), "/api/qr/my-brand").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert!(location(&response).ends_with("chl=https%3A%2F%2Fsho.rt%2Fmy-brand"));
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_found() {
        let response = get(app(FakeLinkRepo::default()), "/api/qr/nope").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "링크를 찾을 수 없습니다." })
        );
    }

    #[tokio::test]
    async fn test_expired_is_gone_not_missing() {
        let repo = FakeLinkRepo::default();
        repo.insert("old", Some("old-alias"), Some(Duration::minutes(-1)));

        for uri in ["/api/qr/old", "/api/qr/old-alias"] {
            let response = get(app(repo.clone()), uri).await;
            assert_eq!(response.status(), StatusCode::GONE);
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": "만료된 링크입니다." })
            );
        }
    }

    #[tokio::test]
    async fn test_future_expiry_still_redirects() {
        let repo = FakeLinkRepo::default();
        repo.insert("soon", None, Some(Duration::days(1)));

        let response = get(app(repo), "/api/qr/soon").await;
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_blank_code_is_bad_request() {
        let response = get(app(FakeLinkRepo::default()), "/api/qr/%20").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_undecodable_code_is_json_bad_request() {
        for uri in ["/api/qr/%FF", "/%FF"] {
            let response = get(app(FakeLinkRepo::default()), uri).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": "단축 코드가 필요합니다." })
            );
        }
    }

    #[tokio::test]
    async fn test_qr_does_not_count_clicks() {
        let repo = FakeLinkRepo::default();
        repo.insert("abc123", None, None);

        get(app(repo.clone()), "/api/qr/abc123").await;
        assert_eq!(repo.clicks("abc123"), 0);
    }
}

#[cfg(test)]
mod follow_tests {
    use super::*;

    #[tokio::test]
    async fn test_follow_redirects_and_counts() {
        let repo = FakeLinkRepo::default();
        repo.insert("abc123", Some("promo"), None);

        let response = get(app(repo.clone()), "/promo").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "https://example.com/abc123");
        assert_eq!(repo.clicks("abc123"), 1);
    }

    #[tokio::test]
    async fn test_short_code_wins_over_custom_code() {
        let repo = FakeLinkRepo::default();
        repo.insert("abc123", Some("promo"), None);
        repo.insert("promo", None, None);

        let response = get(app(repo.clone()), "/promo").await;

        assert_eq!(location(&response), "https://example.com/promo");
        assert_eq!(repo.clicks("promo"), 1);
        assert_eq!(repo.clicks("abc123"), 0);
    }

    #[tokio::test]
    async fn test_follow_survives_click_failure() {
        let repo = FakeLinkRepo {
            fail_clicks: true,
            ..Default::default()
        };
        repo.insert("abc123", None, None);

        let response = get(app(repo), "/abc123").await;
        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_follow_expired_is_gone() {
        let repo = FakeLinkRepo::default();
        repo.insert("old", None, Some(Duration::seconds(-30)));

        let response = get(app(repo.clone()), "/old").await;
        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(repo.clicks("old"), 0);
    }
}
