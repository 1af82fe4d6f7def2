//! HTTP JSON API for the Library of Babel
//!
//! Thin glue over [`babel_core`]: paginated search, page browsing with
//! next/previous navigation, random pages, and occurrence counts, served
//! as JSON. The server holds no state beyond the shared [`babel_core::Library`]
//! handle.

mod config;
mod error;
pub mod server;
mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use server::run;
pub use types::*;
