use azuml::{run_http_server, Args, Settings};
use clap::Parser;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let settings = match args.config_path {
        Some(config_path) => Settings::build(Some(config_path)),
        None => Settings::new(),
    }?;
    run_http_server(settings).await
}
