//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod pensioner_detail;

pub use pensioner_detail::PensionerDetailRepository;
