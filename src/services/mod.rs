//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Services can be called directly by the record-management layer or through Axum handlers.

pub mod call_number_service;

// Re-export for convenience
pub use call_number_service::*;
