pub mod errors;
#[cfg(any(test, feature = "test-util"))]
pub mod fake_node;

#[cfg(any(test, feature = "test-util"))]
use alloy::providers::mock;
use {
    crate::AlloyProvider,
    alloy::{
        network::{EthereumWallet, TxSigner},
        primitives::Signature,
        providers::{Provider, ProviderBuilder},
    },
    url::Url,
};

/// Provider that fills, signs and sends transactions from `signer`.
pub fn provider_with_signer(
    url: Url,
    signer: impl TxSigner<Signature> + Send + Sync + 'static,
) -> AlloyProvider {
    tracing::debug!(%url, sender = %signer.address(), "connecting to node");
    ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_http(url)
        .erased()
}

/// Provider answering requests from the given asserter instead of a node.
#[cfg(any(test, feature = "test-util"))]
pub fn dummy_provider(
    asserter: mock::Asserter,
    signer: impl TxSigner<Signature> + Send + Sync + 'static,
) -> AlloyProvider {
    ProviderBuilder::new()
        .wallet(EthereumWallet::new(signer))
        .connect_mocked_client(asserter)
        .erased()
}
