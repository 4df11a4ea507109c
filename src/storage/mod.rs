//! Read-only access to the four record collections.
//!
//! The aggregation core never talks to a store directly; it receives slices.
//! [`CollectionSource`] is the capability a caller injects to obtain those
//! snapshots, and [`JsonStore`] is the bundled backend reading exported JSON
//! snapshot files. All writes belong to the surrounding system.

pub mod document;
pub mod json_store;

pub use json_store::JsonStore;

use crate::domain::{Note, Remainder, Stone};
use crate::errors::Result;

/// Abstraction over snapshot providers for the stones, remainders, archives,
/// and notes collections. Each call yields a consistent in-memory snapshot;
/// how it is fetched (batch read, subscription, file) is the backend's concern.
pub trait CollectionSource: Send + Sync {
    fn stones(&self) -> Result<Vec<Stone>>;
    fn remainders(&self) -> Result<Vec<Remainder>>;
    /// Archived remainders. Implementations must force every record to
    /// [`crate::domain::RemainderStatus::Completed`] regardless of the stored
    /// status field.
    fn archives(&self) -> Result<Vec<Remainder>>;
    fn notes(&self) -> Result<Vec<Note>>;
}
