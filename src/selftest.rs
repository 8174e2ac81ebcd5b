//! Scripted scenarios behind the `self-test` CLI mode.
//!
//! Each scenario exercises the ingest pipeline end-to-end through the same
//! entry points the upload path uses, printing one PASS/FAIL line per
//! scenario. Kept separate from the unit tests so a deployed binary can
//! vouch for itself without a toolchain present.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::data::filter;
use crate::data::ingest::parse_payload;
use crate::data::model::DT_SECONDS;

/// Run every scenario, printing one line each. Returns whether all passed.
pub fn run() -> bool {
    let scenarios: &[(&str, fn() -> Result<(), String>)] = &[
        ("column naming", column_naming),
        ("time axis synthesis", time_axis),
        ("velocity derivation", velocity_derivation),
        ("channel count validation", channel_count_validation),
        ("malformed transport payload", malformed_payload),
        ("empty window filter", empty_window),
        ("parse idempotence", idempotence),
    ];

    let mut passed = 0;
    for (name, scenario) in scenarios {
        match scenario() {
            Ok(()) => {
                println!("PASS  {name}");
                passed += 1;
            }
            Err(cause) => println!("FAIL  {name}: {cause}"),
        }
    }
    println!("{passed}/{} scenarios passed", scenarios.len());
    passed == scenarios.len()
}

/// Frame plain text the way the upload widget does.
fn framed(text: &str) -> String {
    format!("data:text/plain;base64,{}", STANDARD.encode(text))
}

fn ensure(cond: bool, cause: &str) -> Result<(), String> {
    if cond {
        Ok(())
    } else {
        Err(cause.to_string())
    }
}

fn column_naming() -> Result<(), String> {
    let table = parse_payload(&framed("1 2 3 4\n6 7 8 9")).map_err(|e| e.to_string())?;
    let expected = [
        "Time", "Pos_1", "Pos_2", "Pos_3", "Pos_4", "Vel_1", "Vel_2", "Vel_3", "Vel_4",
    ];
    ensure(
        table.column_names() == expected,
        &format!("columns were {:?}", table.column_names()),
    )
}

fn time_axis() -> Result<(), String> {
    let table =
        parse_payload(&framed("0 0 0 0\n1 1 1 1\n2 2 2 2")).map_err(|e| e.to_string())?;
    for (n, &t) in table.time().iter().enumerate() {
        if t != n as f64 * DT_SECONDS {
            return Err(format!("time[{n}] was {t}, expected {}", n as f64 * DT_SECONDS));
        }
    }
    Ok(())
}

fn velocity_derivation() -> Result<(), String> {
    let table = parse_payload(&framed("0 0 0 0\n1 2 3 4")).map_err(|e| e.to_string())?;
    let ch1 = &table.channels()[0];
    ensure(ch1.velocities[0].is_none(), "first velocity was not missing")?;
    ensure(
        ch1.velocities[1] == Some(1000.0),
        &format!("Vel_1[1] was {:?}, expected 1000.0", ch1.velocities[1]),
    )
}

fn channel_count_validation() -> Result<(), String> {
    for text in ["1 2 3\n4 5 6", "1 2 3 4 5\n6 7 8 9 10"] {
        let width = text.lines().next().unwrap().split_whitespace().count();
        match parse_payload(&framed(text)) {
            Ok(_) => return Err(format!("accepted {width} columns")),
            Err(e) => {
                let msg = e.to_string();
                ensure(
                    msg.contains("expected 4"),
                    &format!("error did not name the expected count: {msg}"),
                )?;
            }
        }
    }
    Ok(())
}

fn malformed_payload() -> Result<(), String> {
    ensure(
        parse_payload("payload without separator").is_err(),
        "accepted a payload with no comma",
    )?;
    ensure(
        parse_payload("data:text/plain;base64,!!!").is_err(),
        "accepted invalid base64",
    )
}

fn empty_window() -> Result<(), String> {
    let table =
        parse_payload(&framed("0 0 0 0\n1 1 1 1\n2 2 2 2")).map_err(|e| e.to_string())?;
    let windowed = filter::window(&table, 500.0, 600.0);
    ensure(windowed.is_empty(), "out-of-range window was not empty")?;
    ensure(
        windowed.velocity_long_form().is_empty(),
        "empty window still produced velocity rows",
    )
}

fn idempotence() -> Result<(), String> {
    let payload = framed("0.1 0.2 0.3 0.4\n0.5 0.6 0.7 0.8");
    let first = parse_payload(&payload).map_err(|e| e.to_string())?;
    let second = parse_payload(&payload).map_err(|e| e.to_string())?;

    let a = serde_json::to_string(&first).map_err(|e| e.to_string())?;
    let b = serde_json::to_string(&second).map_err(|e| e.to_string())?;
    ensure(a == b, "two parses serialized differently")
}
