//! # babel-core
//!
//! A computational Library of Babel: a deterministic bijection between page
//! addresses and page contents, and a search that exhibits, for any query,
//! an effectively unbounded set of addresses whose pages contain it. No
//! page is ever stored; everything is recomputed from the address or from
//! the `(query, variant)` pair.
//!
//! ## Architecture
//!
//! ```text
//! search:  query + variant
//!              ↓ seeded synthesis (SHA-256 → SplitMix64)
//!          3200-symbol page
//!              ↓ base-29 encode
//!          BigUint page index
//!              ↓ radix decomposition (·4 ·5 ·32 ·410)
//!          Location (hexagon, wall, shelf, book, page)
//!
//! browse:  the same pipeline, bottom to top
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use babel_core::Library;
//!
//! let library = Library::new();
//! let hits = library.search_paginated("hello world", 0, 20)?;
//! for location in &hits {
//!     let content = library.browse(location)?;
//!     assert!(content.contains("hello world"));
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Public modules
pub mod alphabet;
pub mod base29;
pub mod census;
pub mod library;
pub mod location;
pub mod page;
pub mod prng;

// Internal modules
mod error;
mod types;

// Re-exports
pub use error::{Error, Result};
pub use types::*;

pub use alphabet::Alphabet;
pub use library::Library;
pub use location::Location;
