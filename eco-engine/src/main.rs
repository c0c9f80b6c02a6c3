use anyhow::Context;
use eco_engine::quote::{into_response, quote_json};
use eco_engine::{ApiResponse, EcoRankPricingEngine, setup_environment};
use std::io::Read;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // 1. Environment (dotenv, config, logger)
    let config = match setup_environment() {
        Ok(config) => config,
        Err(e) => {
            let output = serde_json::to_string_pretty(&ApiResponse::<()>::error(&e))
                .context("failed to encode response")?;
            println!("{output}");
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::debug!(environment = %config.environment, "eco-quote starting");

    // 2. Engine
    let engine = EcoRankPricingEngine::from_config(&config);

    // 3. Input: file argument or stdin
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read order file {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read order from stdin")?;
            buf
        }
    };

    // 4. Quote and print the envelope
    let response = into_response(quote_json(&engine, &input));
    let output = serde_json::to_string_pretty(&response).context("failed to encode response")?;
    println!("{output}");

    if response.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::error!(code = ?response.code, message = %response.message, "Quote failed");
        Ok(ExitCode::FAILURE)
    }
}
