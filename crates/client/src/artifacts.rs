//! Contract artifacts.
//!
//! Loads the compiled interface description (JSON ABI) and binary (hex bytecode) produced by
//! `solc` for the Splitwise contract.

use std::{fs, path::Path};

use alloy::json_abi::JsonAbi;
use alloy_primitives::Bytes;
use tracing::debug;

use crate::{errors::SplitwiseError, sol::FUNCTION_SIGNATURES};

/// Reads a JSON ABI file.
pub fn load_abi(path: impl AsRef<Path>) -> Result<JsonAbi, SplitwiseError> {
    let contents = read(path.as_ref())?;
    let abi: JsonAbi = serde_json::from_str(&contents)?;
    debug!(path = %path.as_ref().display(), functions = abi.functions.len(), "loaded contract abi");
    Ok(abi)
}

/// Reads a hex encoded bytecode file. A leading `0x` and surrounding whitespace are ignored.
pub fn load_bytecode(path: impl AsRef<Path>) -> Result<Bytes, SplitwiseError> {
    let contents = read(path.as_ref())?;
    let trimmed = contents.trim();
    let bytecode = hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))?;
    debug!(path = %path.as_ref().display(), len = bytecode.len(), "loaded contract bytecode");
    Ok(Bytes::from(bytecode))
}

/// Checks that `abi` declares every function in [`FUNCTION_SIGNATURES`].
pub fn verify_interface(abi: &JsonAbi) -> Result<(), SplitwiseError> {
    let declared: Vec<String> = abi.functions().map(|function| function.signature()).collect();
    match FUNCTION_SIGNATURES.iter().find(|signature| !declared.iter().any(|d| d == *signature)) {
        Some(missing) => Err(SplitwiseError::MissingFunction((*missing).to_string())),
        None => Ok(()),
    }
}

fn read(path: &Path) -> Result<String, SplitwiseError> {
    fs::read_to_string(path).map_err(|source| SplitwiseError::Io { path: path.to_path_buf(), source })
}
