use katha::configuration::get_config;
use katha::startup::Application;
use katha::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("katha".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let config = get_config()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
