use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::{api, assets};
use crate::highlight::YamlHighlighter;
use crate::queue::{QueueStorage, SharedQueueRegistry};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedQueueRegistry,
    pub storage: Option<QueueStorage>,
    pub highlighter: Arc<YamlHighlighter>,
}

impl AppState {
    pub fn new(registry: SharedQueueRegistry) -> Self {
        Self {
            registry,
            storage: None,
            highlighter: Arc::new(YamlHighlighter::new()),
        }
    }

    pub fn with_storage(mut self, storage: QueueStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_highlighter(mut self, highlighter: YamlHighlighter) -> Self {
        self.highlighter = Arc::new(highlighter);
        self
    }
}

#[derive(Clone)]
pub struct WebServer {
    pub port: u16,
    pub host: String,
    pub state: AppState,
}

impl WebServer {
    pub fn new(port: u16, host: String, state: AppState) -> Self {
        Self { port, host, state }
    }

    pub async fn start(&self) -> Result<()> {
        let app = self.create_app();
        // Convert localhost to 127.0.0.1 for proper parsing
        let host = if self.host == "localhost" {
            "127.0.0.1"
        } else {
            &self.host
        };
        let addr: SocketAddr = format!("{}:{}", host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address: {}:{}", host, self.port))?;

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(
            "🚀 Web server ready and listening on http://{}:{}",
            self.host, self.port
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn create_app(&self) -> Router {
        create_router(self.state.clone())
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/styles/main.css", get(serve_css))
        .route(
            "/api/queues",
            get(api::list_queues).post(api::create_queue),
        )
        .route(
            "/api/queues/:name",
            get(api::get_queue)
                .put(api::update_queue)
                .delete(api::delete_queue),
        )
        .route("/api/upload", post(api::upload_queue))
        .route("/api/format", post(api::format_yaml))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}

async fn serve_index() -> Html<&'static str> {
    info!("📄 Serving index.html to client");
    Html(assets::INDEX_HTML)
}

async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::MAIN_CSS)
}
