//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum).
//! Only the record view consumed by the call-number engine and domain error types.

pub mod errors;
pub mod record;

pub use errors::DomainError;
pub use record::RecordView;
