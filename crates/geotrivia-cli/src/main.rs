use tracing_subscriber::EnvFilter;

mod command;
mod util;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("geotrivia=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    command::run().await
}
