use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::ParseError;
use super::model::{ShockTable, DEFAULT_CHANNELS};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode an uploaded `<metadata>,<base64>` payload into a [`ShockTable`]
/// with the standard four position channels.
///
/// Pure: the same payload always yields the same table, and nothing outside
/// the return value is touched.
pub fn parse_payload(contents: &str) -> Result<ShockTable, ParseError> {
    parse_payload_with(contents, DEFAULT_CHANNELS)
}

/// As [`parse_payload`], for a log with `channels` position columns.
pub fn parse_payload_with(contents: &str, channels: usize) -> Result<ShockTable, ParseError> {
    let text = decode_transport(contents)?;
    let rows = parse_matrix(&text, channels)?;
    let table = ShockTable::from_rows(&rows);
    log::debug!("parsed {} samples across {} channels", table.len(), channels);
    Ok(table)
}

// ---------------------------------------------------------------------------
// Transport decoding
// ---------------------------------------------------------------------------

/// Strip the metadata prefix (everything up to the first comma) and
/// base64-decode the remainder into UTF-8 text.
fn decode_transport(contents: &str) -> Result<String, ParseError> {
    let (_, b64) = contents
        .split_once(',')
        .ok_or(ParseError::MissingSeparator)?;
    let bytes = STANDARD.decode(b64.trim())?;
    Ok(String::from_utf8(bytes)?)
}

// ---------------------------------------------------------------------------
// Matrix parsing
// ---------------------------------------------------------------------------

/// Split decoded text into whitespace-delimited numeric rows.
///
/// The first row's width is authoritative: a later row with a different
/// width is rejected outright, never truncated or padded. Blank lines are
/// skipped.
fn parse_matrix(text: &str, channels: usize) -> Result<Vec<Vec<f64>>, ParseError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ParseError::NonNumeric {
                    row: rows.len(),
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, ParseError>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ParseError::RaggedRow {
                    row: rows.len(),
                    expected: first.len(),
                    actual: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let width = rows[0].len();
    if width != channels {
        return Err(ParseError::ChannelCount {
            expected: channels,
            actual: width,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame plain text the way the upload widget does.
    fn framed(text: &str) -> String {
        format!("data:text/plain;base64,{}", STANDARD.encode(text))
    }

    #[test]
    fn parses_a_four_column_log() {
        let table = parse_payload(&framed("1 2 3 4\n6 7 8 9")).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.column_names(),
            vec![
                "Time", "Pos_1", "Pos_2", "Pos_3", "Pos_4", "Vel_1", "Vel_2", "Vel_3", "Vel_4"
            ]
        );
        assert_eq!(table.channels()[0].positions, vec![1.0, 6.0]);
        assert_eq!(table.channels()[3].positions, vec![4.0, 9.0]);
    }

    #[test]
    fn velocity_of_unit_step_at_one_khz_is_one_thousand() {
        let table = parse_payload(&framed("0 0 0 0\n1 2 3 4")).unwrap();
        let ch1 = &table.channels()[0];
        assert_eq!(ch1.velocities[0], None);
        assert_eq!(ch1.velocities[1], Some(1000.0));
    }

    #[test]
    fn tolerates_tabs_blank_lines_and_repeated_spaces() {
        let table = parse_payload(&framed("1\t2  3 4\n\n   \n5 6\t7   8\n")).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.channels()[1].positions, vec![2.0, 6.0]);
    }

    #[test]
    fn parses_signed_and_scientific_tokens() {
        let table = parse_payload(&framed("-1.5 2e-3 +0.25 4\n0 0 0 0")).unwrap();
        assert_eq!(table.channels()[0].positions[0], -1.5);
        assert_eq!(table.channels()[1].positions[0], 0.002);
    }

    #[test]
    fn rejects_three_and_five_column_logs() {
        let err = parse_payload(&framed("1 2 3\n4 5 6")).unwrap_err();
        match err {
            ParseError::ChannelCount { expected, actual } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected ChannelCount, got {other:?}"),
        }

        let err = parse_payload(&framed("1 2 3 4 5\n6 7 8 9 10")).unwrap_err();
        assert!(err.to_string().contains("expected 4"));
        assert!(err.to_string().contains("found 5"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_payload(&framed("1 2 3 4\n5 6 7")).unwrap_err();
        match err {
            ParseError::RaggedRow {
                row,
                expected,
                actual,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        let err = parse_payload(&framed("1 2 bogus 4\n5 6 7 8")).unwrap_err();
        match err {
            ParseError::NonNumeric { row, token } => {
                assert_eq!(row, 0);
                assert_eq!(token, "bogus");
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
    }

    #[test]
    fn rejects_payload_without_comma() {
        assert!(matches!(
            parse_payload("no comma here").unwrap_err(),
            ParseError::MissingSeparator
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            parse_payload("data:text/plain;base64,@@not-base64@@").unwrap_err(),
            ParseError::Base64(_)
        ));
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let payload = format!("data:text/plain;base64,{}", STANDARD.encode([0xffu8, 0xfe, 0x01]));
        assert!(matches!(
            parse_payload(&payload).unwrap_err(),
            ParseError::Utf8(_)
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_payload(&framed("")).unwrap_err(),
            ParseError::EmptyInput
        ));
        assert!(matches!(
            parse_payload(&framed("\n  \n")).unwrap_err(),
            ParseError::EmptyInput
        ));
    }

    #[test]
    fn channel_count_is_configurable() {
        let table = parse_payload_with(&framed("1 2\n3 4"), 2).unwrap();
        assert_eq!(table.column_names(), vec!["Time", "Pos_1", "Pos_2", "Vel_1", "Vel_2"]);
    }

    #[test]
    fn parsing_is_idempotent() {
        let payload = framed("0.1 0.2 0.3 0.4\n0.5 0.6 0.7 0.8\n0.9 1.0 1.1 1.2");
        let first = parse_payload(&payload).unwrap();
        let second = parse_payload(&payload).unwrap();
        assert_eq!(first, second);
    }
}
