//! Server lifecycle - start on a connection target, stop gracefully.

use std::io;
use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use blog_core::error::RepoError;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Errors raised while bringing the server up.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] io::Error),

    #[error("Failed to open post store: {0}")]
    Database(#[from] RepoError),
}

/// App data and routes. Shared by the binary, the live server and tests.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .configure(handlers::configure_routes);
    }
}

/// A server accepting connections on a background task.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    state: AppState,
}

impl RunningServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// The state handlers see, for seeding and inspecting the store.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Stop accepting connections, drain in-flight requests, and wait for
    /// the server task to finish.
    pub async fn stop(self) -> io::Result<()> {
        tracing::info!(addr = %self.addr, "Stopping server");
        self.handle.stop(true).await;
        self.join().await
    }

    /// Run until the server shuts down on its own (e.g. on SIGINT).
    pub async fn wait(self) -> io::Result<()> {
        self.join().await
    }

    async fn join(self) -> io::Result<()> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(io::Error::other(e)),
        }
    }
}

/// Open the store named by the configuration and start serving.
///
/// Must be called from within an actix system (`#[actix_web::main]` or
/// `#[actix_web::test]`).
pub async fn start(config: &AppConfig) -> Result<RunningServer, StartupError> {
    let state = AppState::connect(config.database.as_ref()).await?;
    start_with_state(&config.host, config.port, state)
}

/// Start serving over an injected state. Port `0` binds any free port.
pub fn start_with_state(
    host: &str,
    port: u16,
    state: AppState,
) -> Result<RunningServer, StartupError> {
    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(configure_app(app_state.clone()))
    })
    .bind((host, port))?;

    let addr = server.addrs().first().copied().ok_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "server bound no address")
    })?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_web::rt::spawn(server);

    tracing::info!(%addr, storage = state.storage.as_str(), "Server started");

    Ok(RunningServer {
        addr,
        handle,
        task,
        state,
    })
}
