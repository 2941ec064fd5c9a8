//! JSON body extractor that rejects with the API error envelope.

use std::future::Future;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, OptionalFromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Json<T>` whose rejections become [`AppError::BadRequest`].
///
/// As an `Option`, a request without a JSON content type yields `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let extract = <Json<T> as FromRequest<S>>::from_request(req, state);
        async move {
            let Json(value) = extract.await?;
            Ok(Self(value))
        }
    }
}

impl<T, S> OptionalFromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let extract = <Json<T> as OptionalFromRequest<S>>::from_request(req, state);
        async move {
            let value = extract.await?;
            Ok(value.map(|Json(value)| Self(value)))
        }
    }
}
