//! HTTP middleware for request processing.
//!
//! Provides cross-origin and observability layers.

pub mod cors;
pub mod tracing;
