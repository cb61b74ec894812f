//! Extractors whose rejections are reported as `InvalidArgument` (400)
//! with the uniform error body, instead of axum's default statuses.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query},
    Json,
};

use crate::access::Error;

#[derive(FromRequest)]
#[from_request(via(Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(Error))]
pub struct PathParam<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
