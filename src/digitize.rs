//! Rewriting text so that spelled-out numbers become digits.
//!
//! The token list is walked left to right. Wherever the matcher recognizes a
//! cardinal-number phrase the phrase's decimal value is written instead and
//! the consumed tokens are skipped; every other token is copied through
//! untouched, so the rest of the text is byte-identical.

use std::io::{Read, Write};

use log::debug;

use crate::matcher;
use crate::tokens::{Token, tokenize};
use crate::utils::Result;

fn spans_newline(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|token| token.is_space() && token.raw.contains('\n'))
}

/// Rewrite `text` into `out`, replacing every cardinal-number phrase with
/// its decimal digits
pub fn digitize(text: &str, out: &mut impl Write) -> Result<()> {
    let tokens = tokenize(text);
    let mut replaced = 0usize;
    let mut index = 0;

    while index < tokens.len() {
        match matcher::cardinal(&tokens[index..]) {
            Some(m) => {
                // A phrase wrapped across a line break collapses into one
                // number; keep a newline so the line structure survives.
                if spans_newline(&tokens[index..index + m.len]) {
                    out.write_all(b"\n")?;
                }
                write!(out, "{}", m.value)?;
                index += m.len;
                replaced += 1;
            }
            None => {
                out.write_all(tokens[index].raw.as_bytes())?;
                index += 1;
            }
        }
    }

    debug!(
        "digitize: replaced {} phrases across {} tokens",
        replaced,
        tokens.len()
    );
    Ok(())
}

/// Read all of `input`, rewrite it, and write the result to `out`
pub fn convert(input: &mut impl Read, out: &mut impl Write) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    digitize(&text, out)
}
