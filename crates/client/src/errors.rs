//! Errors.
//!
//! This module contains error types that can be emitted by the crate.

use std::path::PathBuf;

use alloy::{contract, providers::PendingTransactionError};
use alloy_primitives::U256;
use alloy_transport::TransportError;
use thiserror::Error;

/// The error that can be emitted by [`crate::Splitwise`] and [`crate::artifacts`].
///
/// Only [`SplitwiseError::NotEvenlyDivisible`] and [`SplitwiseError::EmptySplit`] originate in
/// the client; remote failures are carried through untouched.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SplitwiseError {
    #[error("must be evenly divisible: {total} across {recipients} addresses")]
    NotEvenlyDivisible { total: U256, recipients: usize },

    #[error("cannot split a bill between zero addresses")]
    EmptySplit,

    #[error(transparent)]
    Contract(#[from] contract::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError),

    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("invalid contract interface: {0}")]
    InvalidAbi(#[from] serde_json::Error),

    #[error("contract interface is missing `{0}`")]
    MissingFunction(String),

    #[error("invalid contract bytecode: {0}")]
    InvalidBytecode(#[from] hex::FromHexError),

    #[error("deployment receipt {0} has no contract address")]
    MissingContractAddress(alloy_primitives::TxHash),
}
