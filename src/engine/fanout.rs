// Concurrent fan-out/join over two downstream calls

//! # Fan-out / Join
//!
//! [`FanOutJoiner::fetch_and_join`] launches two independent downstream calls
//! on their own tokio tasks, suspends until *both* have produced a value and
//! then combines them into one [`JoinResult`].
//!
//! ```text
//!            ┌── spawn ── service1.call() ──┐
//! caller ────┤                              ├── join ── JoinResult
//!            └── spawn ── service2.call() ──┘
//! ```
//!
//! Because the calls overlap, the total latency is the longer of the two,
//! not their sum. There is no timeout, retry or cancellation: if a call never
//! completes, the caller waits forever.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::models::JoinResult;
use crate::Result;

/// Latency of each simulated call unless configured otherwise
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

/// A single remote call producing one string
///
/// ## Rust Learning Notes:
///
/// ### Why `Send + Sync + 'static`?
/// Each call runs on a task created with `tokio::spawn`, which may move it to
/// another worker thread and may outlive the current stack frame. The
/// service is therefore shared as an `Arc<dyn DownstreamService>`.
#[async_trait::async_trait]
pub trait DownstreamService: Send + Sync + 'static {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn call(&self) -> String;
}

/// Stand-in for a slow remote service
///
/// Sleeps for `latency`, then answers with a fixed response.
#[derive(Debug, Clone)]
pub struct SimulatedService {
    name: String,
    latency: Duration,
    response: String,
}

impl SimulatedService {
    pub fn new(name: impl Into<String>, latency: Duration, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latency,
            response: response.into(),
        }
    }

    /// First demo service
    pub fn service1(latency: Duration) -> Self {
        Self::new("service1", latency, "Réponse du service 1")
    }

    /// Second demo service
    pub fn service2(latency: Duration) -> Self {
        Self::new("service2", latency, "Réponse du service 2")
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait::async_trait]
impl DownstreamService for SimulatedService {
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self) -> String {
        tokio::time::sleep(self.latency).await;
        self.response.clone()
    }
}

/// Runs two downstream calls concurrently and joins the results
#[derive(Clone)]
pub struct FanOutJoiner {
    service1: Arc<dyn DownstreamService>,
    service2: Arc<dyn DownstreamService>,
}

impl FanOutJoiner {
    pub fn new(service1: Arc<dyn DownstreamService>, service2: Arc<dyn DownstreamService>) -> Self {
        Self { service1, service2 }
    }

    /// The two simulated demo services, both sleeping `latency`
    pub fn simulated(latency: Duration) -> Self {
        Self::new(
            Arc::new(SimulatedService::service1(latency)),
            Arc::new(SimulatedService::service2(latency)),
        )
    }

    /// Call both services concurrently and wait for both answers
    ///
    /// ## Errors
    /// Only fails if one of the spawned tasks panics or is aborted.
    pub async fn fetch_and_join(&self) -> Result<JoinResult> {
        let started = Instant::now();

        let first = Self::spawn_call(self.service1.clone());
        let second = Self::spawn_call(self.service2.clone());

        // Rendezvous: each handle is matched to its own field, so completion
        // order does not matter.
        let (service1, service2) = tokio::join!(first, second);
        let result = JoinResult {
            service1: service1?,
            service2: service2?,
        };

        info!("🔀 Joined both downstream calls in {:?}", started.elapsed());
        Ok(result)
    }

    fn spawn_call(service: Arc<dyn DownstreamService>) -> tokio::task::JoinHandle<String> {
        tokio::spawn(async move {
            let started = Instant::now();
            let response = service.call().await;
            debug!("📡 {} answered in {:?}", service.name(), started.elapsed());
            response
        })
    }
}

impl Default for FanOutJoiner {
    fn default() -> Self {
        Self::simulated(DEFAULT_LATENCY)
    }
}
