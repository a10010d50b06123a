//! Authenticated identity
//!
//! The auth middleware resolves the caller and stores an [`AuthenticatedUser`]
//! in the request extensions. Handlers take it as an extractor.

use crate::id::UserId;

/// Identity attached to a request that passed the auth middleware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                crate::error::app_error::AppError::unauthorized(crate::message::UNAUTHORIZED)
            })
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extracts_identity_from_extensions() {
        let user = AuthenticatedUser::new(UserId::new());
        let mut req = Request::builder().body(()).unwrap();
        req.extensions_mut().insert(user);
        let (mut parts, _) = req.into_parts();

        let extracted = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted, user);
    }

    #[tokio::test]
    async fn test_rejects_without_identity() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        let err = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
