//! Solidity types.
//!
//! This module contains the interface of the Splitwise contract that the client talks to.

use alloy::sol;
use alloy_sol_types::SolCall;

sol! {
    /// @notice The Splitwise contract.
    #[sol(rpc)]
    #[derive(Debug, PartialEq, Eq)]
    interface ISplitwise {
        /// @notice A money request stored by the contract.
        struct MoneyRequest {
            /// @notice The identifier generated by the contract.
            uint256 id;
            /// @notice The address that requested the money.
            address from;
            /// @notice The address the money is requested from.
            address to;
            /// @notice The requested amount in wei.
            uint256 amount;
            /// @notice Whether the request has been paid.
            bool paid;
        }

        /// @notice Requests `amount` wei from `to` on behalf of the sender.
        function submitMoneyRequest(address to, uint256 amount) external;

        /// @notice Requests an equal share of `totalAmount` from each of `addresses`.
        function splitTheBill(uint256 totalAmount, address[] calldata addresses) external;

        /// @notice Rejects an incoming request.
        function rejectMoneyRequest(uint256 requestId) external;

        /// @notice Revokes a request sent by the sender.
        function cancelMoneyRequest(uint256 requestId) external;

        /// @notice Pays a single incoming request.
        function payForRequestedAmount(uint256 requestId) external payable;

        /// @notice Pays every incoming request sent by `creditor`.
        function payToAddress(address creditor) external payable;

        /// @notice Pays every incoming request.
        function payForAllTheRequests() external payable;

        /// @notice Every address that ever sent or received a request.
        function getParticipatingAddresses() external view returns (address[] memory);

        /// @notice Requests sent by the caller.
        function getSentRequests() external view returns (MoneyRequest[] memory);

        /// @notice Requests sent to the caller.
        function getReceivedRequests() external view returns (MoneyRequest[] memory);

        /// @notice Addresses with active requests to the caller.
        function getAllCreditors() external view returns (address[] memory);

        /// @notice Addresses the caller has active requests to.
        function getAllDebtors() external view returns (address[] memory);

        /// @notice Sum of the caller's active incoming requests.
        function getTotalAmountOwed() external view returns (uint256);

        /// @notice Sum of the caller's active outgoing requests.
        function getTotalAmountRequested() external view returns (uint256);

        /// @notice Amount the caller owes to `creditor`.
        function getAmountOwedTo(address creditor) external view returns (uint256);

        /// @notice Amount the caller requested from `debtor`.
        function getAmountRequestedFrom(address debtor) external view returns (uint256);
    }
}

/// Canonical signatures of every function the client calls.
pub const FUNCTION_SIGNATURES: [&str; 16] = [
    ISplitwise::submitMoneyRequestCall::SIGNATURE,
    ISplitwise::splitTheBillCall::SIGNATURE,
    ISplitwise::rejectMoneyRequestCall::SIGNATURE,
    ISplitwise::cancelMoneyRequestCall::SIGNATURE,
    ISplitwise::payForRequestedAmountCall::SIGNATURE,
    ISplitwise::payToAddressCall::SIGNATURE,
    ISplitwise::payForAllTheRequestsCall::SIGNATURE,
    ISplitwise::getParticipatingAddressesCall::SIGNATURE,
    ISplitwise::getSentRequestsCall::SIGNATURE,
    ISplitwise::getReceivedRequestsCall::SIGNATURE,
    ISplitwise::getAllCreditorsCall::SIGNATURE,
    ISplitwise::getAllDebtorsCall::SIGNATURE,
    ISplitwise::getTotalAmountOwedCall::SIGNATURE,
    ISplitwise::getTotalAmountRequestedCall::SIGNATURE,
    ISplitwise::getAmountOwedToCall::SIGNATURE,
    ISplitwise::getAmountRequestedFromCall::SIGNATURE,
];
