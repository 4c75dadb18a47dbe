//! webnav - load addresses the way the embedded web view would
//!
//! Usage: `webnav [--secure] [--no-infer-scheme] <address>...`

use std::env;

use webnav::network::HttpFetcher;
use webnav::shell::{Outcome, Shell};
use webnav::{NAME, NavigationConfig, VERSION};

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut config = NavigationConfig::from_env();
    let mut addresses = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--secure" => config.secure_mode = true,
            "--no-infer-scheme" => config.infer_scheme = false,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => addresses.push(arg),
        }
    }

    if addresses.is_empty() {
        print_usage();
        std::process::exit(2);
    }

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("❌ Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "🚀 {} v{} - secure mode {}",
        NAME,
        VERSION,
        if config.secure_mode { "on" } else { "off" }
    );

    let mut shell = Shell::new(config, fetcher);
    let mut failures = 0;

    for address in &addresses {
        match shell.navigate(address).await {
            Ok(Outcome::Loaded(page)) => println!(
                "✅ {} [{}] {} ({} bytes)",
                page.url(),
                page.status(),
                page.title(),
                page.content_length()
            ),
            Ok(Outcome::Failed(html)) => {
                failures += 1;
                println!("❌ {}\n{}", address, html);
            }
            Err(e) => {
                failures += 1;
                eprintln!("⛔ {}: {}", address, e);
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: {} [--secure] [--no-infer-scheme] <address>...", NAME);
}
