//! Splitwise Utilities.
//!
//! Ambient helpers shared by the Splitwise client crates.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

mod logger;

pub use logger::*;
