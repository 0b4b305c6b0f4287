//! # tradfri — Trådfri gateway client
//!
//! Composition root that wires the adapters together and runs the CLI.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file, credential file)
//! - Open the DTLS session and build the gateway client over the CoAP codec
//! - `serve`: run the REST and gRPC adapters on one shared client
//! - `authenticate`: provision a client identity and persist its key
//! - `get`/`put`: one raw request, payload printed to stdout
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod credentials;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use tradfri_adapter_coap::CoapCodec;
use tradfri_adapter_dtls::{DtlsChannel, DtlsConnector};
use tradfri_adapter_grpc_tonic::TradfriGrpc;
use tradfri_adapter_http_axum::router;
use tradfri_adapter_http_axum::state::AppState;
use tradfri_app::services::{GatewayClient, PairingConfig, pair};
use tradfri_domain::message::Response;

use crate::cli::{AuthenticateArgs, Cli, Command, GlobalOpts, ServeArgs};
use crate::config::Config;

type Client = GatewayClient<DtlsChannel, CoapCodec>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.global.config.as_deref())
        .context("failed to load configuration")?;
    apply_global_opts(&mut config, &cli.global)?;

    init_tracing(&config.logging.filter);
    config.log_sources();

    match cli.command {
        Command::Serve(args) => {
            apply_serve_args(&mut config, args);
            serve(&config).await
        }
        Command::Authenticate(args) => authenticate(&config, args).await,
        Command::Get(args) => {
            let client = connect(&config).await?;
            let response = client.get(&args.path).await;
            finish(client, response).await
        }
        Command::Put(args) => {
            let client = connect(&config).await?;
            let response = client.put(&args.path, &args.payload).await;
            finish(client, response).await
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn apply_global_opts(config: &mut Config, global: &GlobalOpts) -> anyhow::Result<()> {
    if let Some(path) = &global.credentials {
        config.gateway.credentials_file.clone_from(path);
        let found = credentials::read(path)?
            .with_context(|| format!("credential file {} not found", path.display()))?;
        config.use_credentials(found);
    }
    if let Some(gateway) = &global.gateway {
        config.gateway.address.clone_from(gateway);
    }
    Ok(())
}

fn apply_serve_args(config: &mut Config, args: ServeArgs) {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.http_port {
        config.server.http_port = port;
    }
    if let Some(port) = args.grpc_port {
        config.server.grpc_port = port;
    }
}

async fn connect(config: &Config) -> anyhow::Result<Client> {
    let session = config.session()?;
    let client = GatewayClient::connect(&DtlsConnector::new(), CoapCodec, session).await?;
    Ok(client)
}

/// Print a raw response, then close the session.
async fn finish(
    client: Client,
    response: Result<Response, tradfri_domain::error::TradfriError>,
) -> anyhow::Result<()> {
    close(client).await;
    let response = response?;
    println!("{}", response.payload_text());
    anyhow::ensure!(
        response.code.is_success(),
        "gateway answered {}",
        response.code
    );
    Ok(())
}

async fn close(client: Client) {
    if let Err(err) = client.into_channel().close().await {
        tracing::warn!(error = %err, "failed to close gateway session");
    }
}

async fn authenticate(config: &Config, args: AuthenticateArgs) -> anyhow::Result<()> {
    let mut pairing =
        PairingConfig::new(config.gateway_address()?, args.client_id, args.security_code);
    pairing.handshake_timeout = config.handshake_timeout();
    pairing.read_timeout = config.read_timeout();

    let credentials = pair(&DtlsConnector::new(), CoapCodec, pairing)
        .await
        .context("token exchange failed")?;

    let path = &config.gateway.credentials_file;
    credentials::write(path, &credentials)?;
    eprintln!(
        "Credentials for {} written to {}, keep this file safe!",
        credentials.client_id,
        path.display()
    );
    Ok(())
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    let gateway = Arc::new(connect(config).await?);

    let http_listener = TcpListener::bind(config.http_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr()))?;
    let grpc_addr: SocketAddr = config
        .grpc_addr()
        .parse()
        .with_context(|| format!("invalid gRPC bind address {}", config.grpc_addr()))?;

    let app = router::build(AppState::from_arc(Arc::clone(&gateway)));
    let grpc = TradfriGrpc::from_arc(Arc::clone(&gateway)).into_server();

    let (stop, stopped) = watch::channel(false);
    let wait = |mut stopped: watch::Receiver<bool>| async move {
        let _ = stopped.wait_for(|stop| *stop).await;
    };

    tracing::info!(http = %config.http_addr(), grpc = %grpc_addr, "tradfri listening");
    let http = async {
        axum::serve(http_listener, app)
            .with_graceful_shutdown(wait(stopped.clone()))
            .await
            .context("REST server failed")
    };
    let grpc = async {
        tonic::transport::Server::builder()
            .add_service(grpc)
            .serve_with_shutdown(grpc_addr, wait(stopped.clone()))
            .await
            .context("gRPC server failed")
    };
    let signal = async {
        shutdown_signal().await;
        tracing::info!("shutting down");
        let _ = stop.send(true);
        Ok::<_, anyhow::Error>(())
    };

    tokio::try_join!(http, grpc, signal)?;

    match Arc::try_unwrap(gateway) {
        Ok(client) => close(client).await,
        Err(_) => tracing::warn!("gateway client still in use, session not closed"),
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
