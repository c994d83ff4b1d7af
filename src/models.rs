//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `atmosphere`)
//! based on an opinionated taxonomy. This organization may evolve as more
//! models are added.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter that converts
//! typed [`uom`] quantities and delegates to the numeric engine in
//! [`crate::support`].

pub mod atmosphere;
