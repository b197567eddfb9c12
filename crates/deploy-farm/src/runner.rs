//! Resolve, submit, confirm, report.

use {
    crate::{environment::Environment, request::DeploymentRequest},
    alloy::primitives::Address,
    anyhow::{Context, Result},
    std::io::Write,
};

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Deploys one new instance of `contract` constructed from `request`.
///
/// Waiting for the confirmation is the only suspension point. There are no
/// retries: any failure ends the deployment.
pub async fn deploy(
    environment: &dyn Environment,
    contract: &str,
    request: &DeploymentRequest,
) -> Result<Address> {
    let categories = request
        .check_alignment()
        .context("invalid deployment request")?;
    let factory = environment
        .contract_factory(contract)
        .with_context(|| format!("could not get contract factory for {contract}"))?;

    tracing::info!(contract, categories, "deploying");
    let address = factory
        .deploy(request)
        .await
        .with_context(|| format!("deployment of {contract} was not confirmed"))?;
    tracing::info!(contract, %address, "deployment confirmed");
    Ok(address)
}

/// Reports the outcome of a deployment and returns the process exit status.
pub fn report(result: Result<Address>, stdout: &mut impl Write, stderr: &mut impl Write) -> u8 {
    let result = result.and_then(|address| {
        writeln!(stdout, "Staking deployed to: {address}")
            .context("failed to report deployed address")
    });
    match result {
        Ok(()) => SUCCESS,
        Err(err) => {
            // Nowhere left to report to if this fails.
            let _ = writeln!(stderr, "{err:?}");
            FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::environment::{MockContractFactory, MockEnvironment},
        alloy::primitives::address,
        anyhow::anyhow,
        contracts::ArtifactError,
    };

    const DEPLOYED: Address = address!("0xABC0000000000000000000000000000000000123");

    fn request() -> DeploymentRequest {
        DeploymentRequest {
            categories: vec!["common".into(), "unique".into()],
            total_general_nfts: vec![100, 100],
            total_rapid_nfts: vec![100, 100],
            general_farm_times: vec![1000, 1000],
            rapid_farm_times: vec![1000, 1000],
            general_tokens_required: vec!["1".into(), "1".into()],
            rapid_tokens_required: vec!["1".into(), "1".into()],
            ..DeploymentRequest::rinkeby()
        }
    }

    fn environment_deploying(result: fn() -> Result<Address>) -> MockEnvironment {
        let mut environment = MockEnvironment::new();
        environment
            .expect_contract_factory()
            .times(1)
            .returning(move |name| {
                assert_eq!(name, "ShoefyFarm");
                let mut factory = MockContractFactory::new();
                factory
                    .expect_deploy()
                    .times(1)
                    .returning(move |request| {
                        assert_eq!(request.check_alignment(), Ok(2));
                        result()
                    });
                Ok(Box::new(factory))
            });
        environment
    }

    async fn run(
        environment: &MockEnvironment,
        request: &DeploymentRequest,
    ) -> (u8, String, String) {
        let result = deploy(environment, "ShoefyFarm", request).await;
        let (mut stdout, mut stderr) = (Vec::new(), Vec::new());
        let status = report(result, &mut stdout, &mut stderr);
        (
            status,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[tokio::test]
    async fn confirmed_deployment_prints_address() {
        let environment = environment_deploying(|| Ok(DEPLOYED));

        let (status, stdout, stderr) = run(&environment, &request()).await;

        assert_eq!(status, SUCCESS);
        assert_eq!(stdout, format!("Staking deployed to: {DEPLOYED}\n"));
        assert_eq!(stdout.lines().count(), 1);
        assert!(stderr.is_empty());
    }

    #[tokio::test]
    async fn unknown_contract_fails_without_output() {
        let mut environment = MockEnvironment::new();
        environment
            .expect_contract_factory()
            .times(1)
            .returning(|name| {
                Err(ArtifactError::NotFound {
                    name: name.to_owned(),
                    root: "artifacts".into(),
                }
                .into())
            });

        let (status, stdout, stderr) = run(&environment, &request()).await;

        assert_eq!(status, FAILURE);
        assert!(stdout.is_empty());
        assert!(stderr.contains("could not get contract factory for ShoefyFarm"));
        assert!(stderr.contains("artifact for contract \"ShoefyFarm\" not found"));
    }

    #[tokio::test]
    async fn rejected_deployment_fails_without_output() {
        let environment = environment_deploying(|| Err(anyhow!("transaction reverted")));

        let (status, stdout, stderr) = run(&environment, &request()).await;

        assert_eq!(status, FAILURE);
        assert!(stdout.is_empty());
        assert!(stderr.contains("deployment of ShoefyFarm was not confirmed"));
        assert!(stderr.contains("transaction reverted"));
    }

    #[tokio::test]
    async fn misaligned_request_is_never_submitted() {
        let mut environment = MockEnvironment::new();
        environment.expect_contract_factory().never();
        let mut request = request();
        request.total_rapid_nfts.pop();

        let (status, stdout, stderr) = run(&environment, &request).await;

        assert_eq!(status, FAILURE);
        assert!(stdout.is_empty());
        assert!(stderr.contains("total_rapid_nfts has 1 entries but there are 2 categories"));
    }

    #[test]
    fn failing_stdout_is_a_failure() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut stderr = Vec::new();
        let status = report(Ok(DEPLOYED), &mut Closed, &mut stderr);

        assert_eq!(status, FAILURE);
        assert!(
            String::from_utf8(stderr)
                .unwrap()
                .contains("failed to report deployed address")
        );
    }
}
