use mietoru_server::config::ServerConfig;
use mietoru_server::main_lib::{init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);
    run(config).await
}
