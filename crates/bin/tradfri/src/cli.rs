//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Control IKEA Trådfri lights and blinds through the gateway.
#[derive(Debug, Parser)]
#[command(name = "tradfri", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Gateway address, `host[:port]` (port defaults to 5684)
    #[arg(long, global = true, value_name = "ADDRESS")]
    pub gateway: Option<String>,

    /// Configuration file (defaults to ./tradfri.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Credential file holding `clientId=token`
    #[arg(long, global = true, value_name = "PATH")]
    pub credentials: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the REST and gRPC APIs until interrupted
    Serve(ServeArgs),

    /// Provision a client identity and write its key to the credential file
    Authenticate(AuthenticateArgs),

    /// GET a raw gateway resource and print its payload
    Get(GetArgs),

    /// PUT a raw JSON payload to a gateway resource and print the reply
    Put(PutArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind both listeners to
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub http_port: Option<u16>,

    #[arg(long)]
    pub grpc_port: Option<u16>,
}

#[derive(Debug, Args)]
pub struct AuthenticateArgs {
    /// Identity to provision, e.g. the name of this controller
    #[arg(long)]
    pub client_id: String,

    /// Security code printed on the bottom of the gateway
    #[arg(long)]
    pub security_code: String,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Resource path, e.g. `15001/65537`
    pub path: String,
}

#[derive(Debug, Args)]
pub struct PutArgs {
    /// Resource path, e.g. `15001/65537`
    pub path: String,

    /// JSON body, e.g. `{"3311":[{"5850":1}]}`
    #[arg(long)]
    pub payload: String,
}
