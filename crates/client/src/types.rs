//! Types.
//!
//! Local shapes for data returned by the contract.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::sol::ISplitwise;

/// A request for `amount` wei from `to`, raised by `from`.
///
/// Read-only data: it is only ever built from a query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyRequest {
    /// The identifier generated by the contract.
    pub request_id: U256,
    /// The address that raised the request.
    pub from: Address,
    /// The address that owes the amount.
    pub to: Address,
    /// The requested amount in wei.
    pub amount: U256,
    /// Whether the request has been paid.
    pub paid: bool,
}

impl From<ISplitwise::MoneyRequest> for MoneyRequest {
    fn from(request: ISplitwise::MoneyRequest) -> Self {
        Self {
            request_id: request.id,
            from: request.from,
            to: request.to,
            amount: request.amount,
            paid: request.paid,
        }
    }
}
