//! Normalization of backend list responses.
//!
//! The backend returns collections in one of two shapes depending on the
//! endpoint:
//!
//! ## Bare array
//!
//! ```json
//! [{ "id": "c1" }, { "id": "c2" }]
//! ```
//!
//! ## Paging envelope
//!
//! ```json
//! {
//!   "content": [{ "id": "c1" }, { "id": "c2" }],
//!   "totalElements": 2,
//!   "totalPages": 1,
//!   "number": 0,
//!   "size": 20
//! }
//! ```
//!
//! Every consumer goes through [`normalize`] (or its typed counterpart
//! [`decode_collection`]) instead of sniffing the shape itself. Any other shape
//! yields an empty list so views can still render their "no data" state.
//!
//! # Example
//!
//! ```ignore
//! use linarqa_core::envelope::{decode_collection, normalize};
//! use serde_json::json;
//!
//! assert_eq!(normalize(&json!({ "content": [{ "id": "x" }] })).len(), 1);
//! assert!(normalize(&json!(null)).is_empty());
//!
//! let courses: Vec<Course> = decode_collection(body)?;
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{CoreError, CoreResult};

/// The paging envelope produced by the backend's paginated endpoints.
///
/// Only `content` is required; the metadata fields are kept when present so
/// callers can drive "load more" controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    /// Items of the current page
    pub content: Vec<T>,
    /// Total number of items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<i64>,
    /// Total number of pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    /// Zero-based index of the current page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    /// Requested page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

impl<T> PageEnvelope<T> {
    /// Whether pages exist after this one.
    ///
    /// Returns `false` when the envelope carries no page metadata.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match (self.number, self.total_pages) {
            (Some(number), Some(total_pages)) => number + 1 < total_pages,
            _ => false,
        }
    }
}

/// Response shape recognized by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    Bare,
    Paged,
    Unrecognized,
}

/// Detects which of the known response shapes `body` has.
#[must_use]
pub fn detect_shape(body: &Value) -> EnvelopeShape {
    match body {
        Value::Array(_) => EnvelopeShape::Bare,
        Value::Object(map) if matches!(map.get("content"), Some(Value::Array(_))) => {
            EnvelopeShape::Paged
        }
        _ => EnvelopeShape::Unrecognized,
    }
}

/// Returns the list carried by a response body, in source order.
///
/// Never fails: an unrecognized shape (null, `{}`, scalar, or an object whose
/// `content` is not an array) yields an empty list.
#[must_use]
pub fn normalize(body: &Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Owned variant of [`normalize`] that moves the items out of `body`.
#[must_use]
pub fn into_items(body: Value) -> Vec<Value> {
    let shape = detect_shape(&body);
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("content") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    match shape {
        EnvelopeShape::Unrecognized => warn!("Unrecognized response shape, treating as empty list"),
        shape => debug!(?shape, count = items.len(), "Normalized response body"),
    }

    items
}

/// Normalizes `body` and deserializes every item into `T`.
///
/// An unrecognized shape yields `Ok(vec![])`. An item of a recognized list
/// that is not a valid `T` is reported as [`CoreError::Decode`] with its index.
pub fn decode_collection<T>(body: Value) -> CoreResult<Vec<T>>
where
    T: DeserializeOwned,
{
    into_items(body)
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| CoreError::Decode { index, source })
        })
        .collect()
}
