use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    airtelmoney::run().await
}
