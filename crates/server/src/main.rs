use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use clap::Parser;
use rusqlite::Connection;
use server::{
    cli::Cli,
    db::{self, close_database, create_pool, delete_database, run_migrations},
    routes::router,
    AppState,
};
use shared::*;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing();

    let args = Cli::parse();
    debug!(?args);

    if args.debug_delete_database {
        delete_database(&args.sqlite_connection_string)?;
    }

    // Run the migrations synchronously before creating the pool or launching the server
    let ran = run_migrations(&args.sqlite_connection_string)?;
    info!("Ran {ran} db migrations");

    let pool = create_pool(&args.sqlite_connection_string)?;

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);
    let listener = TcpListener::bind(socket).await?;
    info!("listening on {}", listener.local_addr()?);

    let connection_string = args.sqlite_connection_string.clone();
    axum::serve(listener, router(AppState::new(pool.clone(), args)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    pool.close();
    let conn = Connection::open(&connection_string)?;
    db::run_pragmas(&conn)?;
    close_database(conn)?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving, the process can still be killed
        error!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
