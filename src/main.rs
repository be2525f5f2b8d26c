//! Trivia API Service Entry Point
//!
//! Initializes configuration and storage, then starts the HTTP server.

use trivia_api::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
