//! Stakeclock CLI
//!
//! Prints the next eligible claim time for a last-claim value.
//!
//! Usage: `stakeclock [--settings <path>] <last_claim> [<now_ms>]`
//!
//! `last_claim` is JSON: a number (seconds or milliseconds) or an RFC 3339 string.

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use stakeclock::{
    calendar::format_claim_timestamp_at,
    claim::{compute_next_claim_time, LastClaim},
    settings::DisplaySettings,
};

fn main() -> anyhow::Result<()> {
    stakeclock::init();

    let mut settings_path: Option<String> = None;
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                settings_path = Some(args.next().context("--settings requires a path")?);
            }
            "-h" | "--help" => {
                println!("Usage: stakeclock [--settings <path>] <last_claim> [<now_ms>]");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let (last_claim, now) = match positional.as_slice() {
        [last] => (last, Utc::now()),
        [last, now_ms] => {
            let ms: i64 = now_ms
                .parse()
                .with_context(|| format!("Invalid now_ms: {}", now_ms))?;
            let now = DateTime::from_timestamp_millis(ms)
                .with_context(|| format!("now_ms out of range: {}", ms))?;
            (last, now)
        }
        _ => bail!("Usage: stakeclock [--settings <path>] <last_claim> [<now_ms>]"),
    };

    let settings = match settings_path {
        Some(path) => DisplaySettings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => DisplaySettings::default(),
    };

    let last_claim = LastClaim::parse(last_claim).context("Failed to parse last claim")?;
    let next = compute_next_claim_time(last_claim, now);

    tracing::debug!(
        "Next claim at {} ms ({})",
        next.timestamp_millis(),
        settings.time_zone_label
    );
    println!("{}", format_claim_timestamp_at(next, now, settings.zone()));

    Ok(())
}
