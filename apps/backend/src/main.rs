#[tokio::main]
async fn main() -> anyhow::Result<()> {
    formcraft_backend::run().await
}
