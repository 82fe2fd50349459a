//! Mock weather upstream that echoes the query parameters it received

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Query, State};
use axum::{Json, Router, routing};
use serde_json::{Map, Value, json};
use tokio_util::sync::CancellationToken;

pub struct MockWeather {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockWeatherState>,
}

struct MockWeatherState {
    request_count: AtomicU32,
}

impl MockWeather {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockWeatherState {
            request_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/data/2.5/weather", routing::get(weather_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Endpoint URL to hand to the gateway configuration
    pub fn endpoint(&self) -> String {
        format!("http://{}/data/2.5/weather", self.addr)
    }

    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::SeqCst)
    }
}

impl Drop for MockWeather {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn weather_handler(
    State(state): State<Arc<MockWeatherState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Value> {
    state.request_count.fetch_add(1, Ordering::SeqCst);

    let received: Map<String, Value> = params
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect();

    Json(json!({"received": received}))
}
