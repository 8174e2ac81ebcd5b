use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;

use shocklog::{parse_payload, selftest, ShockTable};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("self-test") => {
            if selftest::run() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => match summarize_stdin() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("Failed to process upload: {e:#}");
                ExitCode::FAILURE
            }
        },
        Some(other) => {
            eprintln!("unrecognized argument: {other}");
            eprintln!("Usage: shocklog            parse a payload from stdin and print a summary");
            eprintln!("       shocklog self-test  run the built-in scenarios");
            ExitCode::from(2)
        }
    }
}

/// Headless stand-in for the upload widget: read one framed payload from
/// stdin and print a column summary.
fn summarize_stdin() -> anyhow::Result<()> {
    let mut contents = String::new();
    std::io::stdin()
        .read_to_string(&mut contents)
        .context("reading payload from stdin")?;

    let table = parse_payload(contents.trim())?;
    log::info!(
        "parsed {} samples, {} channels",
        table.len(),
        table.channels().len()
    );
    print_summary(&table);
    Ok(())
}

fn print_summary(table: &ShockTable) {
    let duration = table.time().last().copied().unwrap_or(0.0);
    println!("{} samples spanning {:.3} s", table.len(), duration);
    println!("{:<8} {:>14} {:>14}", "column", "min", "max");

    for ch in table.channels() {
        let label = ch.position_label();
        print_stats(&label, min_max(ch.positions.iter().copied()));
    }
    for ch in table.channels() {
        let label = ch.velocity_label();
        print_stats(&label, min_max(ch.velocities.iter().filter_map(|v| *v)));
    }
}

fn print_stats(label: &str, range: Option<(f64, f64)>) {
    match range {
        Some((min, max)) => println!("{label:<8} {min:>14.4} {max:>14.4}"),
        None => println!("{label:<8} {:>14} {:>14}", "n/a", "n/a"),
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
