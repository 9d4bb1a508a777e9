//! Dashboard HTTP server.
//!
//! Reads tables under DATA_DIR and listens on BIND_ADDR (e.g. 0.0.0.0:8080).

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    ttev_core::log();
    ttev_core::kys();
    ttev_server::run().await
}
