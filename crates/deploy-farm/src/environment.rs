//! The execution environment deployments are submitted to.

use {
    crate::request::DeploymentRequest,
    alloy::{
        contract::RawCallBuilder,
        primitives::{Address, Bytes},
        sol_types::SolConstructor,
    },
    anyhow::Result,
    contracts::{ArtifactStore, alloy::ShoefyFarm},
    ethrpc::{AlloyProvider, alloy::errors::ContractErrorExt},
};

/// Hands out construction capabilities for named contracts.
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    /// Resolves the factory of the contract called `name`.
    fn contract_factory(&self, name: &str) -> Result<Box<dyn ContractFactory>>;
}

/// Creates new contract instances.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ContractFactory: Send + Sync {
    /// Submits the construction and waits until it is confirmed, returning
    /// the address of the new contract.
    async fn deploy(&self, request: &DeploymentRequest) -> Result<Address>;
}

/// Hardhat style environment: compiled artifacts on disk, deployments sent
/// through a node with a local signer.
pub struct Hardhat {
    provider: AlloyProvider,
    artifacts: ArtifactStore,
}

impl Hardhat {
    pub fn new(provider: AlloyProvider, artifacts: ArtifactStore) -> Self {
        Self {
            provider,
            artifacts,
        }
    }
}

impl Environment for Hardhat {
    fn contract_factory(&self, name: &str) -> Result<Box<dyn ContractFactory>> {
        let artifact = self.artifacts.resolve(name)?;
        let creation_code = artifact.creation_code(&ShoefyFarm::CONSTRUCTOR_INPUTS)?;
        Ok(Box::new(ArtifactFactory {
            provider: self.provider.clone(),
            contract: artifact.contract_name,
            creation_code,
        }))
    }
}

struct ArtifactFactory {
    provider: AlloyProvider,
    contract: String,
    creation_code: Bytes,
}

#[async_trait::async_trait]
impl ContractFactory for ArtifactFactory {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<Address> {
        let constructor = request.constructor()?;
        let code = contracts::deploy_code(&self.creation_code, &constructor.abi_encode());
        tracing::debug!(
            contract = %self.contract,
            size = code.len(),
            "sending deployment transaction"
        );

        RawCallBuilder::new_raw_deploy(self.provider.clone(), code)
            .deploy()
            .await
            .map_err(|err| {
                tracing::debug!(?err, failure = ?err.failure(), "deployment failed");
                err.into()
            })
    }
}
