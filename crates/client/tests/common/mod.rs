#![allow(dead_code)]

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use alloy_sol_types::SolValue;
use alloy_transport::mock::Asserter;
use splitwise_client::{sol::ISplitwise, Splitwise};

/// Test environment with a client bound to a mocked node.
pub struct SplitwiseTestContext {
    /// The client under test.
    pub client: Splitwise<DynProvider>,
    /// Queue of responses the mocked node returns, in order.
    pub asserter: Asserter,
    /// The signer the client acts for.
    pub signer: Address,
}

/// Creates a deterministic address from a single byte.
#[must_use]
pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

/// Sets up a client whose node answers from a response queue.
#[must_use]
pub fn setup() -> SplitwiseTestContext {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .on_mocked_client(asserter.clone())
        .erased();
    let signer = addr(0x51);
    let client = Splitwise::new(addr(0xc0), signer, provider);
    SplitwiseTestContext { client, asserter, signer }
}

/// Builds an on-chain money request.
#[must_use]
pub fn money_request(id: u64, from: Address, to: Address, amount: u64, paid: bool) -> ISplitwise::MoneyRequest {
    ISplitwise::MoneyRequest { id: U256::from(id), from, to, amount: U256::from(amount), paid }
}

/// Queues the return data of a call returning `value`.
pub fn push_return<T: SolValue>(asserter: &Asserter, value: T) {
    asserter.push_success(&Bytes::from((value,).abi_encode_params()));
}

/// Queues the hash the mocked node returns for a sent transaction.
pub fn push_tx_hash(asserter: &Asserter, byte: u8) -> TxHash {
    let hash = TxHash::repeat_byte(byte);
    asserter.push_success(&hash);
    hash
}
