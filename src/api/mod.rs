// Albums REST API module
// Routes, server configuration and the builder used by the server binary

pub mod handlers;
pub mod types;


use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::engine::{AlbumStorage, FanOutJoiner, InMemoryAlbumStorage, DEFAULT_LATENCY};
use handlers::{
    delete_albums, get_album_by_id, get_albums, handler_with_goroutine, health_check, not_found,
    post_albums, update_albums, AlbumsApiState,
};

/// Albums API server configuration
#[derive(Clone, Debug)]
pub struct AlbumsApiConfig {
    pub port: u16,
    pub host: String,
    pub cors_enabled: bool,
    /// Latency of each simulated downstream call in the fan-out demo
    pub demo_latency: Duration,
}

impl Default for AlbumsApiConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "localhost".to_string(),
            cors_enabled: true,
            demo_latency: DEFAULT_LATENCY,
        }
    }
}

impl AlbumsApiConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Albums API Server
pub struct AlbumsApiServer {
    config: AlbumsApiConfig,
    state: AlbumsApiState,
}

impl AlbumsApiServer {
    /// Create a server over the seeded catalogue
    pub fn new(config: AlbumsApiConfig) -> Self {
        let state = AlbumsApiState::new(
            Arc::new(InMemoryAlbumStorage::seeded()),
            FanOutJoiner::simulated(config.demo_latency),
        );

        Self { config, state }
    }

    /// Create server with default configuration
    pub fn with_defaults() -> Self {
        Self::new(AlbumsApiConfig::default())
    }

    /// Set custom storage backend
    pub fn with_storage(mut self, storage: Arc<dyn AlbumStorage>) -> Self {
        self.state.storage = storage;
        self
    }

    /// Set custom fan-out joiner
    pub fn with_joiner(mut self, joiner: FanOutJoiner) -> Self {
        self.state.joiner = Arc::new(joiner);
        self
    }

    pub fn config(&self) -> &AlbumsApiConfig {
        &self.config
    }

    /// Create the Axum router with all album routes
    pub fn create_router(&self) -> Router {
        let api_router = Router::new()
            // Record store
            .route("/albums", get(get_albums))
            .route("/albumByID/:id", get(get_album_by_id))
            .route("/postAlbums", post(post_albums))
            .route("/updateAlbums/:id", put(update_albums))
            .route("/deleteAlbums/:id", delete(delete_albums))
            // Concurrent join demo
            .route("/handlerWithGorutine", get(handler_with_goroutine))
            // Health check
            .route("/health", get(health_check))
            // Fallback for unknown routes
            .fallback(not_found)
            // Add shared state
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        // Add CORS if enabled
        if self.config.cors_enabled {
            api_router.layer(CorsLayer::permissive())
        } else {
            api_router
        }
    }

    /// Run the server until ctrl-c
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = self.create_router();
        let addr = self.config.address();

        // Resolve names like "localhost" before binding
        let socket_addr = tokio::net::lookup_host(addr.as_str())
            .await?
            .next()
            .ok_or_else(|| format!("could not resolve {}", addr))?;

        info!("💿 Albums API server starting");
        info!("📡 Server address: http://{}", addr);
        info!("🔗 API endpoints:");
        info!("   GET    http://{}/albums", addr);
        info!("   GET    http://{}/albumByID/:id", addr);
        info!("   POST   http://{}/postAlbums", addr);
        info!("   PUT    http://{}/updateAlbums/:id", addr);
        info!("   DELETE http://{}/deleteAlbums/:id", addr);
        info!("   GET    http://{}/handlerWithGorutine", addr);
        info!("   GET    http://{}/health", addr);
        info!("📋 Configuration:");
        info!("   CORS enabled: {}", self.config.cors_enabled);
        info!("   Demo latency: {:?}", self.config.demo_latency);

        axum::Server::bind(&socket_addr)
            .serve(app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("👋 Albums API server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
}

/// Builder pattern for Albums API server
pub struct AlbumsApiServerBuilder {
    config: AlbumsApiConfig,
    storage: Option<Arc<dyn AlbumStorage>>,
    joiner: Option<FanOutJoiner>,
}

impl AlbumsApiServerBuilder {
    pub fn new() -> Self {
        Self {
            config: AlbumsApiConfig::default(),
            storage: None,
            joiner: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.config.host = host;
        self
    }

    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.config.cors_enabled = enabled;
        self
    }

    pub fn with_demo_latency(mut self, latency: Duration) -> Self {
        self.config.demo_latency = latency;
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn AlbumStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_joiner(mut self, joiner: FanOutJoiner) -> Self {
        self.joiner = Some(joiner);
        self
    }

    pub fn build(self) -> AlbumsApiServer {
        let mut server = AlbumsApiServer::new(self.config);

        if let Some(storage) = self.storage {
            server = server.with_storage(storage);
        }

        if let Some(joiner) = self.joiner {
            server = server.with_joiner(joiner);
        }

        server
    }
}

impl Default for AlbumsApiServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to create a server with default settings
pub fn create_default_server() -> AlbumsApiServer {
    AlbumsApiServerBuilder::new().build()
}

/// Convenience function to create a server with custom configuration
pub fn create_server_with_config(config: AlbumsApiConfig) -> AlbumsApiServer {
    AlbumsApiServer::new(config)
}
