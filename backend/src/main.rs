//! Backend entry-point: wires configuration, migrations, and the REST
//! surface.

use std::env;
use std::net::SocketAddr;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::server::{ServerConfig, run};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| std::io::Error::other("DATABASE_URL must be set"))?;

    run_pending_migrations(&database_url)
        .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;

    let mut pool_config = PoolConfig::new(&database_url);
    if let Ok(raw) = env::var("DB_POOL_MAX_SIZE") {
        match raw.parse::<u32>() {
            Ok(max_size) => pool_config = pool_config.with_max_size(max_size),
            Err(e) => warn!(value = %raw, error = %e, "ignoring invalid DB_POOL_MAX_SIZE"),
        }
    }
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;

    run(ServerConfig::new(bind_addr).with_db_pool(pool)).await
}
