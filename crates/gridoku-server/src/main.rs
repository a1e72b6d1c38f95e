//! gridoku HTTP server entry point.

use std::net::SocketAddr;

use clap::Parser;

/// Sudoku placement-check and solve HTTP service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, gridoku_server::router()).await
}
