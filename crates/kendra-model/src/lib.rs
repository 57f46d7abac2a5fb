//! Client data model for the Kendra search-index service.
//!
//! Requests, responses and value types mirroring the service's JSON wire
//! contract. Nothing in this crate performs I/O on behalf of a request:
//! callers build request records, hand them to whatever transport they use,
//! and decode the reply body back into the matching response record.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kendra_model::model::{ListDataSourcesRequest, Paginator, ServiceRequest};
//! use kendra_model::ModelError;
//!
//! let request = ListDataSourcesRequest::new("1f6a0f0e-3a8a-4b8e-9b7c-0a1b2c3d4e5f".parse()?);
//! let mut pages = Paginator::new(request);
//! while let Some(request) = pages.next_request() {
//!     let body = transport.send(request.target(), request.to_json()?)?;
//!     let page = ListDataSourcesRequest::decode_response(&body)?;
//!     match pages.observe(&page) {
//!         Ok(_) => {}
//!         Err(ModelError::NoMorePages) => break,
//!         Err(e) => return Err(e.into()),
//!     }
//! }
//! ```


pub mod config;
pub mod model;

use thiserror::Error;

use model::DocumentAttributeValueType;

/// Service name used in the `X-Amz-Target` header.
pub const SERVICE_TARGET_PREFIX: &str = "AWSKendraFrontendService";

/// API version the records are modelled on.
pub const API_VERSION: &str = "2019-02-03";

/// Content type of request and response bodies.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("\"{token}\" is not a valid {vocabulary}")]
    InvalidEnumValue {
        vocabulary: &'static str,
        token: String,
    },
    #[error("attribute value holds {actual}, not {expected}")]
    WrongVariantAccess {
        expected: DocumentAttributeValueType,
        actual: &'static str,
    },
    #[error("attribute value sets more than one kind: {kinds}")]
    AmbiguousAttributeValue { kinds: String },
    #[error("count must not be negative, got {0}")]
    InvalidCount(i64),
    #[error("{field} \"{value}\" does not match {pattern}")]
    InvalidKey {
        field: &'static str,
        value: String,
        pattern: &'static str,
    },
    #[error("{field} must be {min} to {max} characters long, got {actual}")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error("timestamp {0} is outside the representable range")]
    InvalidTimestamp(i64),
    #[error("no more pages to fetch")]
    NoMorePages,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
