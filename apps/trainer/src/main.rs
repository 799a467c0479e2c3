#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vocab_trainer_lib::run().await
}
