mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use foundry_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let gemini_state = foundry_gemini::build_server(&config);
        let tts_state = foundry_tts::build_server(&config);
        let proxy_state = foundry_proxy::build_server(&config);

        // Build base router with feature routes
        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Gemini-backed routes (text, image, cloud speech)
        app = app.merge(foundry_gemini::endpoint_router().with_state(gemini_state));

        // Local speech synthesis
        app = app.merge(foundry_tts::endpoint_router().with_state(tts_state));

        // Data-API passthrough
        app = app.merge(foundry_proxy::endpoint_router().with_state(proxy_state));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS is applied router-wide so the allow header is present on
        // error responses as well as successes
        app = app.layer(cors::cors_layer(config.server.cors.as_ref()));

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
