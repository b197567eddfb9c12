pub mod arguments;
pub mod environment;
pub mod request;
pub mod runner;

use {
    alloy::primitives::Address,
    anyhow::Result,
    arguments::Arguments,
    contracts::ArtifactStore,
    environment::Hardhat,
    request::DeploymentRequest,
};

/// Deploys the Rinkeby farm to the node and with the account configured in
/// `args`.
pub async fn run(args: &Arguments) -> Result<Address> {
    let provider =
        ethrpc::alloy::provider_with_signer(args.node_url.clone(), args.private_key.clone());
    let environment = Hardhat::new(provider, ArtifactStore::new(&args.artifacts_path));
    runner::deploy(&environment, &args.contract, &DeploymentRequest::rinkeby()).await
}
