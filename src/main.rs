use std::process::ExitCode;

use beacon_server::args::ArgError;
use beacon_server::call_site;
use beacon_server::cli::{self, CliError, Outcome};
use beacon_server::logging::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    tracing::debug!(site = %call_site!(), "beacon-server starting");

    match cli::run(std::env::args().skip(1)) {
        Ok(Outcome::Help(text)) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Start(config)) => {
            tracing::info!(
                server = %format!("{}:{}", config.server_addr, config.server_port),
                client_port = config.client_port,
                interval = ?config.broadcast_period(),
                api = %config.api_endpoint(&config.server_addr),
                "Beacon configured"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// ActionFailure messages already embed their source, so only the top
/// error is printed.
fn report(err: &CliError) {
    eprintln!("Error: {}", err);

    if matches!(
        err,
        CliError::Args(ArgError::Unrecognized { .. } | ArgError::InsufficientArguments { .. })
    ) {
        eprintln!("Run '{} --help' for usage.", cli::PROGRAM);
    }
}
