//! # API crate — gateway to the remote catalog service
//!
//! Every network call the admin panel makes goes through [`ApiClient`]. The
//! client is a thin wrapper over `reqwest`: one method per remote operation,
//! a single attempt per invocation, no retry or timeout policy. Callers get
//! the decoded body on 2xx and an [`ApiError`] otherwise.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] and the request/response plumbing |
//! | [`error`] | [`ApiError`] taxonomy and 422 [`FieldErrors`] payloads |
//! | [`models`] | Response bodies and multipart payload types |
//!
//! All validation, uniqueness and authorization rules live server-side; this
//! crate only shapes requests and decodes responses.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, FieldErrors};
pub use models::{
    ImageFile, ItemDetail, ItemId, LoginResponse, NewItem, Product, RegisterPayload, UpdateItem,
    UserProfile,
};
