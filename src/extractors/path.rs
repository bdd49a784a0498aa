//! Path extractor whose rejection is a 404, so `/people/abc` behaves like an unknown route.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub struct ResourcePath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ResourcePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ResourcePath(value)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), reason = %rejection.body_text(), "unmatched path parameters");
                Err(AppError::NotFound(parts.uri.path().to_string()))
            }
        }
    }
}
