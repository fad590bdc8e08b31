//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod pensioner_detail;

pub use pensioner_detail::HttpPensionerDetailRepository;
