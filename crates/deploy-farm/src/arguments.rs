use {
    alloy::signers::local::PrivateKeySigner,
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    url::Url,
};

#[derive(clap::Parser)]
pub struct LoggingArguments {
    #[clap(long, env, default_value = "warn,deploy_farm=debug")]
    pub log_filter: String,

    /// Emit log events as JSON.
    #[clap(long, env, default_value_t = false, action = clap::ArgAction::Set)]
    pub use_json_logs: bool,
}

#[derive(clap::Parser)]
#[clap(name = "deploy-farm", about = "Deploys the ShoefyFarm staking contract")]
pub struct Arguments {
    #[clap(flatten)]
    pub logging: LoggingArguments,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Private key of the account paying for the deployment.
    #[clap(long, env, hide_env_values = true)]
    pub private_key: PrivateKeySigner,

    /// Root of the Hardhat artifacts directory.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts_path: PathBuf,

    /// Name of the contract whose artifact gets deployed.
    #[clap(long, env, default_value = "ShoefyFarm")]
    pub contract: String,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            logging,
            node_url,
            private_key,
            artifacts_path,
            contract,
        } = self;

        writeln!(f, "log_filter: {}", logging.log_filter)?;
        writeln!(f, "use_json_logs: {}", logging.use_json_logs)?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "private_key: SECRET (address {})", private_key.address())?;
        writeln!(f, "artifacts_path: {}", artifacts_path.display())?;
        writeln!(f, "contract: {contract}")?;
        Ok(())
    }
}
