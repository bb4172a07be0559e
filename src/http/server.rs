use std::sync::Arc;

use anyhow::anyhow;
use log::{error, info};
use rouille::{Request, Response, Server};

use crate::{
    config::HttpConfig,
    domain::song::Song,
    http::{error::ApiError, render},
    storage::StoreConnector,
};

pub struct HttpServer {
    store: Arc<dyn StoreConnector>,
    pub config: HttpConfig,
}

impl HttpServer {
    pub fn new(store: Arc<dyn StoreConnector>, config: HttpConfig) -> Self {
        Self { store, config }
    }

    /// Binds the listening socket. Requests are served once `run` is called on the result.
    pub fn bind(
        self,
    ) -> anyhow::Result<Server<impl Fn(&Request) -> Response + Send + Sync + 'static>> {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        Server::new(addr.as_str(), move |request| self.handle_request(request))
            .map_err(|e| anyhow!("failed to bind HTTP server on {addr}: {e}"))
    }

    pub(crate) fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let response = rouille::router!(request,
            (GET) (/songs) => {
                self.handle_list_songs()
            },
            _ => Response::empty_404()
        );

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.url());
    }

    /// connection lives only for the duration of the query
    fn list_songs(&self) -> Result<Vec<Song>, ApiError> {
        let store = self.store.connect().map_err(ApiError::StoreUnavailable)?;
        store.query_all().map_err(ApiError::Query)
    }

    fn handle_list_songs(&self) -> Response {
        match self.list_songs() {
            Ok(songs) => Response::html(render::song_table(&songs)),
            Err(e) => {
                error!("GET /songs failed: {e}");
                e.into_response()
            }
        }
    }
}
