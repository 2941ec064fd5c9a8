//! Passforge service entry point.

use passforge::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
