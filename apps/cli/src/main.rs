mod config;
mod main_lib;

use config::Config;
use main_lib::{build_provider, init_tracing, run_query};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let provider = build_provider(&config)?;

    let output = run_query(&provider, &config)?;
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);
    Ok(())
}
