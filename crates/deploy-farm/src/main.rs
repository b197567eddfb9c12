use {
    clap::Parser,
    deploy_farm::{arguments::Arguments, runner},
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // `--help` and `--version` are reported as errors too.
            return if err.use_stderr() {
                ExitCode::from(runner::FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    observe::tracing::initialize(&observe::Config::new(
        &args.logging.log_filter,
        args.logging.use_json_logs,
    ));
    tracing::info!("running farm deployment with validated arguments:\n{}", args);

    let result = deploy_farm::run(&args).await;
    ExitCode::from(runner::report(
        result,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    ))
}
