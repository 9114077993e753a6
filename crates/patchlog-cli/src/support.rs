use patchlog_core::{ChangeInfo, WipTags};
use serde::Serialize;
use std::env;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "PATCHLOG_LOG";
pub const LOG_FORMAT_ENV: &str = "PATCHLOG_LOG_FORMAT";

/// Install the stderr subscriber. `PATCHLOG_LOG` takes an `EnvFilter`
/// directive; `PATCHLOG_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

pub fn load_change_or_exit(path: &str) -> ChangeInfo {
    ChangeInfo::load_json(path).unwrap_or_else(|e| {
        eprintln!("error: failed to load change: {e}");
        process::exit(1);
    })
}

pub fn load_tags_or_exit(config: Option<&str>) -> WipTags {
    match config {
        Some(path) => WipTags::load_toml(path).unwrap_or_else(|e| {
            eprintln!("error: failed to load config: {e}");
            process::exit(1);
        }),
        None => WipTags::default(),
    }
}

pub fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("error: failed to render json: {e}");
            process::exit(1);
        }
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
