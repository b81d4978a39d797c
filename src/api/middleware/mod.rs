//! HTTP middleware: rate limiting and request tracing.

pub mod rate_limit;
pub mod tracing;

pub use rate_limit::FixedWindowLimiter;
