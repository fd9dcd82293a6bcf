//! Contract proxy.
//!
//! [`Splitwise`] turns method calls into transactions and `eth_call`s against a deployed
//! Splitwise contract. Commands resolve to the hash of the submitted transaction, queries to the
//! decoded return data.

use alloy::{
    contract::SolCallBuilder,
    json_abi::JsonAbi,
    network::{EthereumWallet, TransactionBuilder},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use alloy_primitives::{Address, Bytes, TxHash, U256};
use tracing::{debug, info};
use url::Url;

use crate::{
    artifacts,
    errors::SplitwiseError,
    sol::ISplitwise::{self, ISplitwiseInstance},
    types::MoneyRequest,
};

/// Checks that `total` can be shared equally between `recipients` addresses.
pub fn ensure_evenly_divisible(total: U256, recipients: usize) -> Result<(), SplitwiseError> {
    if recipients == 0 {
        return Err(SplitwiseError::EmptySplit);
    }
    if !(total % U256::from(recipients)).is_zero() {
        return Err(SplitwiseError::NotEvenlyDivisible { total, recipients });
    }
    Ok(())
}

/// Builds an HTTP provider that signs transactions with `signer`.
pub fn signing_provider(rpc_url: Url, signer: PrivateKeySigner) -> DynProvider {
    ProviderBuilder::new().wallet(EthereumWallet::from(signer)).on_http(rpc_url).erased()
}

/// A typed handle to a deployed Splitwise contract, acting on behalf of a signer.
#[derive(Debug, Clone)]
pub struct Splitwise<P> {
    contract: ISplitwiseInstance<P>,
    signer: Address,
}

impl Splitwise<DynProvider> {
    /// Connects to the contract at `address` over HTTP.
    ///
    /// The interface description is checked against the calls this client makes before binding.
    pub fn connect(
        rpc_url: Url,
        signer: PrivateKeySigner,
        address: Address,
        abi: &JsonAbi,
    ) -> Result<Self, SplitwiseError> {
        artifacts::verify_interface(abi)?;
        let signer_address = signer.address();
        debug!(%rpc_url, contract = %address, signer = %signer_address, "connecting to splitwise");
        Ok(Self::new(address, signer_address, signing_provider(rpc_url, signer)))
    }
}

impl<P: Provider> Splitwise<P> {
    /// Binds to the contract at `address` through an existing provider.
    pub fn new(address: Address, signer: Address, provider: P) -> Self {
        Self { contract: ISplitwise::new(address, provider), signer }
    }

    /// Deploys the contract from its creation bytecode and binds to the new instance.
    pub async fn deploy(provider: P, signer: Address, bytecode: Bytes) -> Result<Self, SplitwiseError> {
        let tx = TransactionRequest::default().with_from(signer).with_deploy_code(bytecode);
        let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
        let address = receipt
            .contract_address
            .ok_or(SplitwiseError::MissingContractAddress(receipt.transaction_hash))?;
        info!(contract = %address, tx = %receipt.transaction_hash, "deployed splitwise");
        Ok(Self::new(address, signer, provider))
    }

    /// The address of the bound contract.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// The address calls are made on behalf of.
    pub fn signer(&self) -> Address {
        self.signer
    }

    // Commands.

    /// Requests `amount` wei from `to`.
    pub async fn submit_money_request(&self, to: Address, amount: U256) -> Result<TxHash, SplitwiseError> {
        debug!(%to, %amount, "submitting money request");
        self.send(self.contract.submitMoneyRequest(to, amount)).await
    }

    /// Validates a split and builds the call without sending it.
    ///
    /// Fails with [`SplitwiseError::NotEvenlyDivisible`] when `total` does not divide equally
    /// between `addresses`. Nothing is sent to the node in either case.
    pub fn split_the_bill_call(
        &self,
        total: U256,
        addresses: Vec<Address>,
    ) -> Result<SolCallBuilder<&P, ISplitwise::splitTheBillCall>, SplitwiseError> {
        ensure_evenly_divisible(total, addresses.len())?;
        Ok(self.contract.splitTheBill(total, addresses))
    }

    /// Requests an equal share of `total` wei from each of `addresses`.
    pub async fn split_the_bill(&self, total: U256, addresses: Vec<Address>) -> Result<TxHash, SplitwiseError> {
        debug!(%total, recipients = addresses.len(), "splitting the bill");
        let call = self.split_the_bill_call(total, addresses)?;
        self.send(call).await
    }

    /// Rejects an incoming request.
    pub async fn reject_money_request(&self, request_id: U256) -> Result<TxHash, SplitwiseError> {
        debug!(%request_id, "rejecting money request");
        self.send(self.contract.rejectMoneyRequest(request_id)).await
    }

    /// Revokes a request the signer sent.
    pub async fn cancel_money_request(&self, request_id: U256) -> Result<TxHash, SplitwiseError> {
        debug!(%request_id, "cancelling money request");
        self.send(self.contract.cancelMoneyRequest(request_id)).await
    }

    /// Pays a single incoming request.
    pub async fn pay_for_requested_amount(&self, request_id: U256) -> Result<TxHash, SplitwiseError> {
        debug!(%request_id, "paying money request");
        self.send(self.contract.payForRequestedAmount(request_id)).await
    }

    /// Pays every incoming request raised by `address`.
    pub async fn pay_to_address(&self, address: Address) -> Result<TxHash, SplitwiseError> {
        debug!(%address, "paying requests from address");
        self.send(self.contract.payToAddress(address)).await
    }

    /// Pays every incoming request.
    pub async fn pay_for_all_the_requests(&self) -> Result<TxHash, SplitwiseError> {
        debug!("paying all requests");
        self.send(self.contract.payForAllTheRequests()).await
    }

    // Queries.

    /// Every address that ever sent or received a request.
    pub async fn get_participating_addresses(&self) -> Result<Vec<Address>, SplitwiseError> {
        Ok(self.contract.getParticipatingAddresses().from(self.signer).call().await?)
    }

    /// Requests sent by the signer.
    pub async fn get_sent_requests(&self) -> Result<Vec<MoneyRequest>, SplitwiseError> {
        let requests = self.contract.getSentRequests().from(self.signer).call().await?;
        Ok(requests.into_iter().map(MoneyRequest::from).collect())
    }

    /// Requests sent to the signer.
    pub async fn get_received_requests(&self) -> Result<Vec<MoneyRequest>, SplitwiseError> {
        let requests = self.contract.getReceivedRequests().from(self.signer).call().await?;
        Ok(requests.into_iter().map(MoneyRequest::from).collect())
    }

    /// Addresses with active requests to the signer.
    pub async fn get_all_creditors(&self) -> Result<Vec<Address>, SplitwiseError> {
        Ok(self.contract.getAllCreditors().from(self.signer).call().await?)
    }

    /// Addresses the signer has active requests to.
    pub async fn get_all_debtors(&self) -> Result<Vec<Address>, SplitwiseError> {
        Ok(self.contract.getAllDebtors().from(self.signer).call().await?)
    }

    /// Sum of the signer's active incoming requests.
    pub async fn get_total_amount_owed(&self) -> Result<U256, SplitwiseError> {
        Ok(self.contract.getTotalAmountOwed().from(self.signer).call().await?)
    }

    /// Sum of the signer's active outgoing requests.
    pub async fn get_total_amount_requested(&self) -> Result<U256, SplitwiseError> {
        Ok(self.contract.getTotalAmountRequested().from(self.signer).call().await?)
    }

    /// Amount the signer owes to `address`.
    pub async fn get_amount_owed_to(&self, address: Address) -> Result<U256, SplitwiseError> {
        Ok(self.contract.getAmountOwedTo(address).from(self.signer).call().await?)
    }

    /// Amount the signer requested from `address`.
    pub async fn get_amount_requested_from(&self, address: Address) -> Result<U256, SplitwiseError> {
        Ok(self.contract.getAmountRequestedFrom(address).from(self.signer).call().await?)
    }

    async fn send<C: alloy_sol_types::SolCall>(
        &self,
        call: SolCallBuilder<&P, C>,
    ) -> Result<TxHash, SplitwiseError> {
        let pending = call.send().await?;
        let tx_hash = *pending.tx_hash();
        info!(tx = %tx_hash, function = C::SIGNATURE, "sent transaction");
        Ok(tx_hash)
    }
}
