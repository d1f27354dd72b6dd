//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an
//! internal `core` submodule. The public surface re-exports the types callers
//! need, and the [`twine_core::Model`] implementation is a thin adapter that
//! delegates to that core.

pub mod thermal;
