use std::sync::Arc;

use clap::Parser;
use tracing::{event, Level};

use rso_sample::flow::SignInFlow;
use rso_sample::http::server::Server;
use rso_sample::util::cli::Options;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let opts = Options::parse();
    let flow = match opts.into_config().and_then(SignInFlow::new) {
        Ok(flow) => flow,
        Err(e) => {
            event!(Level::ERROR, error = %e, "cannot start");
            std::process::exit(2);
        }
    };

    if let Err(e) = Server::new(Arc::new(flow)).serve().await {
        event!(Level::ERROR, error = %e, "server failed");
        std::process::exit(1);
    }
}
