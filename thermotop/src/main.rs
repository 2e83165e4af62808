//! Entry point for the thermotop TUI. Parses args and runs the App.

mod app;
mod ui;

use std::env;
use std::time::Duration;

use app::App;
use thermotop_core::Retention;

struct ParsedArgs {
    tick: Duration,
    retention: Retention,
    zone_b_enabled: bool,
}

fn usage(prog: &str) -> String {
    format!("Usage: {prog} [--tick-ms MS|-i MS] [--retention SAMPLES|-r SAMPLES] [--span SECONDS|-s SECONDS] [--zone-b-off] [--help|-h]")
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "thermotop".into());

    let mut tick_ms: u64 = 1000;
    // 2000 points, the prototype chart limit
    let mut retention = Retention::Count(2000);
    let mut zone_b_enabled = true;

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            "--tick-ms" | "-i" => {
                let v = it.next().ok_or_else(|| usage(&prog))?;
                tick_ms = parse_tick(&v, &prog)?;
            }
            "--retention" | "-r" => {
                let v = it.next().ok_or_else(|| usage(&prog))?;
                retention = parse_count_retention(&v, &prog)?;
            }
            "--span" | "-s" => {
                let v = it.next().ok_or_else(|| usage(&prog))?;
                retention = parse_span_retention(&v, &prog)?;
            }
            "--zone-b-off" => {
                zone_b_enabled = false;
            }
            _ if arg.starts_with("--tick-ms=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    tick_ms = parse_tick(v, &prog)?;
                }
            }
            _ if arg.starts_with("--retention=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    retention = parse_count_retention(v, &prog)?;
                }
            }
            _ if arg.starts_with("--span=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    retention = parse_span_retention(v, &prog)?;
                }
            }
            _ => {
                return Err(format!("Unexpected argument '{arg}'. {}", usage(&prog)));
            }
        }
    }
    Ok(ParsedArgs {
        tick: Duration::from_millis(tick_ms),
        retention,
        zone_b_enabled,
    })
}

fn parse_tick(v: &str, prog: &str) -> Result<u64, String> {
    match v.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(format!("invalid tick interval '{v}'. {}", usage(prog))),
    }
}

fn parse_count_retention(v: &str, prog: &str) -> Result<Retention, String> {
    match v.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Retention::Count(n)),
        _ => Err(format!("invalid retention '{v}'. {}", usage(prog))),
    }
}

fn parse_span_retention(v: &str, prog: &str) -> Result<Retention, String> {
    match v.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Ok(Retention::Span(secs)),
        _ => Err(format!("invalid span '{v}'. {}", usage(prog))),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reuse the same parsing logic for testability
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    let mut app = App::new(parsed.tick, parsed.retention, parsed.zone_b_enabled)?;
    app.run().await
}
