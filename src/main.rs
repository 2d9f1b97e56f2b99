use anyhow::Result;
use clap::{CommandFactory, Parser};

use sec_cli::api_client::ApiClient;
use sec_cli::cli::Cli;
use sec_cli::logging;
use sec_cli::output;
use sec_cli::request::{SearchRequest, API_ROOT};

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();

    let command = match cli.command {
        Some(command) => command,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    // SEC_API_URL is a test hook; real invocations hit the production API.
    let base_url = std::env::var("SEC_API_URL").unwrap_or_else(|_| API_ROOT.to_string());
    let client = ApiClient::new(&base_url, &cli.api_key)?;

    let request = SearchRequest::from(command);
    let result = client.send(&request)?;

    println!("{}", output::render(&result.into_value())?);
    Ok(())
}
