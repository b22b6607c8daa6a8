use crate::config::Config;
use crate::router::{handle, set_static_dir};
use crate::search::HttpSearchClient;
use crate::shell::Shell;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod filter_form;
mod format;
mod responses;
mod router;
mod search;
mod shell;
mod templates;


fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    // 1️⃣ Read settings once
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the backend client and hand it to the shell
    let client = match HttpSearchClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Search client initialization failed: {e}");
            std::process::exit(1);
        }
    };
    info!(endpoint = %client.endpoint(), "search backend");
    let shell = Shell::new(client);
    set_static_dir(config.static_dir.clone());

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.bind_addr);
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &shell) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("drivescope=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
