//! Request Extractors
//!
//! Thin wrappers over axum's `Json`, `Path` and `Query` whose rejections are
//! [`AppError`]s, so malformed bodies, ids and query strings produce the same
//! `{"error": "..."}` envelope as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::app_error::AppError;

/// JSON body extractor with unified rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor with unified rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string extractor with unified rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
