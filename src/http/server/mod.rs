use std::sync::Arc;

use tracing::{event, Level};
use warp::Filter;

use crate::flow::SignInFlow;

mod endpoints;

use endpoints::{
    callback::callback_endpoint,
    display::display_endpoint,
    login::login_endpoint,
};

use super::encoding::error::handle_reject;

/// Login page, OAuth callback and data page, with error pages for rejected requests.
pub fn routes(
    flow: Arc<SignInFlow>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let login = login_endpoint(flow.clone());
    let callback = callback_endpoint(flow.clone());
    let display = display_endpoint(flow);

    login
        .or(callback)
        .or(display)
        .recover(handle_reject)
        .with(warp::log("http-api"))
}

#[derive(Debug)]
pub struct Server {
    flow: Arc<SignInFlow>,
}

impl Server {
    pub fn new(flow: Arc<SignInFlow>) -> Self {
        Self {
            flow: Arc::clone(&flow),
        }
    }

    /// Serves until Ctrl-C.
    pub async fn serve(self) -> Result<(), warp::Error> {
        let server = self.flow.config().server.clone();
        let routes = routes(self.flow);
        let shutdown = async {
            tokio::signal::ctrl_c().await.ok();
            event!(Level::INFO, "shutting down");
        };

        match server.tls {
            Some(tls) => {
                let (addr, serving) = warp::serve(routes)
                    .tls()
                    .cert_path(&tls.cert)
                    .key_path(&tls.key)
                    .bind_with_graceful_shutdown(server.addr, shutdown);
                event!(Level::INFO, %addr, "listening with TLS");
                serving.await;
            }
            None => {
                let (addr, serving) =
                    warp::serve(routes).try_bind_with_graceful_shutdown(server.addr, shutdown)?;
                event!(Level::INFO, %addr, "listening");
                serving.await;
            }
        }

        Ok(())
    }
}
