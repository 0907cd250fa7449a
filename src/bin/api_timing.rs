use std::time::Duration;

use log::info;
use todo_service::diagnostics::timing::TimingClient;
use todo_service::infra::{config, logging};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TARGET_ID: i64 = 8;
const READY_DEADLINE: Duration = Duration::from_secs(60);

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin api_timing -- [--base-url <url>] [--id <todo id>]\n\
         \n\
         Waits for <url>/healthz, then times one request per todo endpoint.\n\
         Defaults: --base-url $API_BASE_URL or {}, --id {}\n",
        DEFAULT_BASE_URL, DEFAULT_TARGET_ID
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _logger = logging::init_logging(&config::log_level(|key| std::env::var(key).ok()))?;

    let mut base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut target_id = DEFAULT_TARGET_ID;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => usage_and_exit(),
            "--base-url" => base_url = args.next().unwrap_or_else(|| usage_and_exit()),
            "--id" => {
                target_id = args
                    .next()
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or_else(|| usage_and_exit())
            }
            _ => usage_and_exit(),
        }
    }

    let client = TimingClient::new(&base_url)?;

    info!("> Waiting for {} to report ready...", base_url);
    client.wait_until_ready(READY_DEADLINE).await?;

    info!("> Measuring API execution times...");
    for measurement in client.measure_all(target_id).await {
        info!("{}", measurement);
    }
    Ok(())
}
