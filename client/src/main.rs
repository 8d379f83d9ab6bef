use clap::Parser;
use dotenvy::dotenv;
use jumpcloud_search::config::{AppConfig, Cli};
use jumpcloud_search::logging::setup_tracing;
use jumpcloud_search::{SearchBody, SearchClient, SearchError, SearchRequest};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // RUST_LOG and APP_ENV may come from .env
    dotenv().ok();
    setup_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Search failed: {:?}", e);
            eprintln!("\nERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), SearchError> {
    let config = AppConfig::new(cli)?;
    let body = SearchBody::for_hostname(&config.hostname);
    let search_req = SearchRequest::new(&config.search_url, &config.api_key, &body)?;
    let client = SearchClient::new()?;

    if config.find_id {
        let id = client.find_id(&search_req).await?;
        println!("{}", id);
        return Ok(());
    }

    println!("{}", search_req);
    let dump = client.send(&search_req).await?;
    let pretty = serde_json::to_string_pretty(&dump).map_err(SearchError::Serialize)?;
    println!("{}", pretty);

    info!("Done.");
    Ok(())
}
