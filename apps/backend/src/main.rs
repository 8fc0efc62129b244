#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocadeck_backend::run().await
}
