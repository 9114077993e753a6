use crate::support::{load_change_or_exit, print_json, yes_no};
use patchlog_sync::{JsonDirSource, fetch_change_updates};
use std::process;

pub fn run(known: String, source: String, json: bool) {
    let info = load_change_or_exit(&known);
    let source = JsonDirSource::new(source);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });

    let updates = runtime
        .block_on(fetch_change_updates(&info, &source))
        .unwrap_or_else(|e| {
            tracing::debug!(change = info.number, error = %e, "update check failed");
            eprintln!("error: {e}");
            process::exit(1);
        });

    if json {
        print_json(&updates);
        return;
    }

    println!("patchlog updates {}", info.number);
    println!("  up to date: {}", yes_no(updates.is_latest));
    match updates.new_status {
        Some(status) => println!("  new status: {status}"),
        None => println!("  new status: (unchanged)"),
    }
    println!("  new messages: {}", yes_no(updates.new_messages));
}
