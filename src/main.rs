use std::env;
use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use crossterm::tty::IsTty;
use log::{debug, info};

use gcloud_choose_project::cli_args::Args;
use gcloud_choose_project::config::{get_provider_binary, PROVIDER_BINARY_ENV};
use gcloud_choose_project::error::Result;
use gcloud_choose_project::execution::SystemRunner;
use gcloud_choose_project::pipeline::{self, Outcome};
use gcloud_choose_project::provider::Gcloud;

fn execute() -> Result<Outcome> {
    let args = Args::parse();

    let binary = get_provider_binary(&args.gcloud_path, env::var(PROVIDER_BINARY_ENV).ok());
    debug!("Provider binary: `{}`", binary);

    let mut out = stdout();
    let request = args.to_request(out.is_tty());
    let gcloud = Gcloud::new(binary, SystemRunner);

    pipeline::run(&gcloud, &request, &mut stdin().lock(), &mut out)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(outcome) => {
            info!("Finished with {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
