//! Channel catalog parser
//!
//! Extracts channel records from a catalog listing page:
//! - Source acquisition (HTTP GET or local file)
//! - Container location by class marker
//! - Field extraction through a class rule table
//! - JSON output

pub mod error;
pub mod extractors;
pub mod output;
pub mod source;

pub use error::{Error, Result};
pub use extractors::*;
pub use output::*;
pub use source::*;
