use std::io::{BufRead, Write};

use tracing::{event, Level};

use base::prelude::*;

use super::Fail;

/// Convert a decimal number into a [`Nibble`], for use both as a
/// clap value parser and for values typed at a prompt.
pub fn parse_nibble(s: &str) -> Result<Nibble, String> {
    let text = s.trim();
    let n: i64 = text
        .parse()
        .map_err(|e| format!("'{text}' is not a number: {e}"))?;
    Nibble::try_from(n).map_err(|e| format!("{n} is not a valid nibble: {e}"))
}

/// Write `question` to `output` and read a single value (one line)
/// from `input`.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<Nibble, Fail> {
    write!(output, "{question}")
        .and_then(|()| output.flush())
        .map_err(|e| Fail::WriteFailed(e.to_string()))?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err(Fail::ReadFailed(
            "input ended before a value was entered".to_string(),
        )),
        Ok(_) => {
            let value = parse_nibble(&line).map_err(Fail::BadValue)?;
            event!(Level::DEBUG, "read {:?} in response to {:?}", value, question);
            Ok(value)
        }
        Err(e) => Err(Fail::ReadFailed(e.to_string())),
    }
}

#[test]
fn test_parse_nibble() {
    assert_eq!(parse_nibble("0"), Ok(Nibble::ZERO));
    assert_eq!(parse_nibble(" 15\n"), Ok(Nibble::FULL));
    assert_eq!(
        parse_nibble("16"),
        Err("16 is not a valid nibble: value is too large (must be between 0 and 15)".to_string())
    );
    assert_eq!(
        parse_nibble("-1"),
        Err("-1 is not a valid nibble: value is too small (must be between 0 and 15)".to_string())
    );
    assert!(parse_nibble("seven").is_err());
    assert!(parse_nibble("").is_err());
}

#[test]
fn test_ask() {
    let mut input = std::io::Cursor::new("12\n");
    let mut output: Vec<u8> = Vec::new();
    let got = ask(&mut input, &mut output, "First value? ").expect("input is valid");
    assert_eq!(got, 12_u8);
    assert_eq!(String::from_utf8(output).unwrap(), "First value? ");
}

#[test]
fn test_ask_rejects_bad_values() {
    let mut output: Vec<u8> = Vec::new();
    match ask(&mut std::io::Cursor::new("20\n"), &mut output, "? ") {
        Err(Fail::BadValue(msg)) => {
            assert!(msg.contains("too large"), "unexpected message {msg}");
        }
        other => {
            panic!("expected a BadValue failure, got {other:?}");
        }
    }
    match ask(&mut std::io::Cursor::new(""), &mut output, "? ") {
        Err(Fail::ReadFailed(_)) => (),
        other => {
            panic!("expected a ReadFailed failure, got {other:?}");
        }
    }
}
