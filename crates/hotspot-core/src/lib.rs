//! # hotspot-core - Core Domain Types
//!
//! Foundation crate for the hotspot settings form. Provides the form's state
//! value, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing and its subscriber/appender, dirs).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Hotspot`] - The form state: enabled flag plus secret, with derived
//!   footer text
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use hotspot_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{Hotspot, DEFAULT_SECRET, ENABLED_SECTION_TITLE};
