use prorator::config;
use prorator::server;
use prorator::utils::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_logger(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}
