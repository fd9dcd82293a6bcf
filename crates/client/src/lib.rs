//! Splitwise Client.
//!
//! Exposes the methods of a deployed Splitwise contract as typed asynchronous calls. Request
//! bookkeeping, debt aggregation and payment all happen on-chain; this crate marshals arguments,
//! forwards them through an alloy provider and shapes the results into [`types::MoneyRequest`].

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

pub mod artifacts;
pub mod client;
pub mod errors;
pub mod sol;
pub mod types;

pub use client::Splitwise;
pub use errors::SplitwiseError;
pub use types::MoneyRequest;
