//! Helper functions used across the application.
//!
//! - [`code_generator`] - short code generation and validation
//! - [`url_normalizer`] - target URL validation and canonicalization
//! - [`client_ip`] - caller address extraction from requests

pub mod client_ip;
pub mod code_generator;
pub mod url_normalizer;
