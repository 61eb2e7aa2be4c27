//! Example: Extract cookies from a browser cookie store.
//!
//! Usage: cargo run --example cookieextract -- <chrome|firefox|safari> <path> [domain]
//!
//! Prints the decoded cookies as JSON. Set `RUST_LOG=debug` to see what the
//! readers are doing.
//!
//! Note: Chrome and Firefox may hold a lock on their database while running.

use browsercookies::cookies::export::to_json;
use browsercookies::cookies::paths::OperatingSystem;
use browsercookies::{reader_for, Browser, BrowserCookieReader, CookieFilter};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(browser) = args.next() else {
        eprintln!("usage: cookieextract <chrome|firefox|safari> <path> [domain]");
        std::process::exit(2);
    };
    let browser: Browser = browser.parse()?;
    let reader = reader_for(browser);

    let Some(path) = args.next().map(PathBuf::from) else {
        eprintln!("missing cookie store path");
        if let Some(os) = OperatingSystem::current() {
            if let Ok(default) = reader.default_cookie_file_path(os) {
                eprintln!("  {} usually keeps it at ~/{}", browser, default);
            }
        }
        std::process::exit(2);
    };

    let mut cookie_filter = CookieFilter::new();
    if let Some(domain) = args.next() {
        cookie_filter = cookie_filter.domain(domain);
    }

    let cookies = reader.read_cookies(&path, &cookie_filter)?;
    eprintln!("{}: {} cookies from {}", browser, cookies.len(), path.display());
    println!("{}", to_json(&cookies)?);
    Ok(())
}
