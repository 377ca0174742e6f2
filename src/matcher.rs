//! Recognition of cardinal-number phrases in a token sequence.
//!
//! A recursive-descent walk with one function per grammar rule. Each
//! function tries to match at the head of the token slice and returns how
//! many tokens it consumed together with the numeric value they denote.
//! Matching is greedy with fallback: `Below100` first tries the hyphenated
//! `SecDig '-' Digit` compound and falls back to the bare tens word, and
//! each suffix rule keeps its shorter match when the longer continuation
//! fails.

use crate::cardinal::{DIGITS, TEENS, TENS};
use crate::tokens::Token;

/// A successful match: tokens consumed and the value they spell out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Number of tokens consumed from the head of the slice
    pub len: usize,
    /// The numeric value of the matched phrase
    pub value: u64,
}

fn norm<'a>(tokens: &'a [Token<'_>], index: usize) -> Option<&'a str> {
    tokens.get(index).map(|token| token.norm())
}

fn is_space(tokens: &[Token], index: usize) -> bool {
    tokens.get(index).is_some_and(|token| token.is_space())
}

/// Digit -> 'one' | .. | 'nine'
fn digit(tokens: &[Token]) -> Option<Match> {
    let word = norm(tokens, 0)?;
    let index = DIGITS.iter().position(|candidate| *candidate == word)?;
    Some(Match {
        len: 1,
        value: index as u64 + 1,
    })
}

/// Teens -> 'ten' | .. | 'nineteen'
fn teens(tokens: &[Token]) -> Option<Match> {
    let word = norm(tokens, 0)?;
    let index = TEENS.iter().position(|candidate| *candidate == word)?;
    Some(Match {
        len: 1,
        value: index as u64 + 10,
    })
}

/// SecDig -> 'twenty' | .. | 'ninety'
fn sec_dig(tokens: &[Token]) -> Option<Match> {
    let word = norm(tokens, 0)?;
    let index = TENS.iter().position(|candidate| *candidate == word)?;
    Some(Match {
        len: 1,
        value: (index as u64 + 2) * 10,
    })
}

/// Below100 -> Digit | Teens | SecDig | SecDig '-' Digit
fn below_100(tokens: &[Token]) -> Option<Match> {
    if let Some(m) = sec_dig(tokens) {
        // Greedy: try the hyphenated compound, keep the bare tens word
        // otherwise.
        if norm(tokens, m.len) == Some("-") {
            if let Some(d) = digit(&tokens[m.len + 1..]) {
                return Some(Match {
                    len: m.len + 1 + d.len,
                    value: m.value + d.value,
                });
            }
        }
        return Some(m);
    }
    teens(tokens).or_else(|| digit(tokens))
}

/// HundredSfx -> 'hundred' | 'hundred and ' Below100
fn hundred_sfx(tokens: &[Token]) -> Option<Match> {
    if norm(tokens, 0)? != "hundred" {
        return None;
    }
    let m = Match {
        len: 1,
        value: 100,
    };

    if is_space(tokens, 1) && norm(tokens, 2) == Some("and") && is_space(tokens, 3) {
        if let Some(inner) = below_100(&tokens[4..]) {
            return Some(Match {
                len: 4 + inner.len,
                value: 100 + inner.value,
            });
        }
    }

    Some(m)
}

/// Hundreds -> Below100 | Digit ' ' HundredSfx
fn hundreds(tokens: &[Token]) -> Option<Match> {
    let m = below_100(tokens)?;

    // Below100 and Digit share a prefix; the hundreds continuation only
    // applies after a single digit word.
    if m.value < 10 && is_space(tokens, m.len) {
        if let Some(sfx) = hundred_sfx(&tokens[m.len + 1..]) {
            return Some(Match {
                len: m.len + 1 + sfx.len,
                value: m.value * 100 + (sfx.value - 100),
            });
        }
    }

    Some(m)
}

/// ThousandSfx -> 'thousand' | 'thousand ' Hundreds
fn thousand_sfx(tokens: &[Token]) -> Option<Match> {
    if norm(tokens, 0)? != "thousand" {
        return None;
    }
    let m = Match {
        len: 1,
        value: 1000,
    };

    if is_space(tokens, 1) {
        if let Some(inner) = hundreds(&tokens[2..]) {
            return Some(Match {
                len: 2 + inner.len,
                value: 1000 + inner.value,
            });
        }
    }

    Some(m)
}

/// Thousands -> Hundreds | Hundreds ' ' ThousandSfx
fn thousands(tokens: &[Token]) -> Option<Match> {
    let m = hundreds(tokens)?;

    if is_space(tokens, m.len) {
        if let Some(sfx) = thousand_sfx(&tokens[m.len + 1..]) {
            return Some(Match {
                len: m.len + 1 + sfx.len,
                value: m.value * 1000 + (sfx.value - 1000),
            });
        }
    }

    Some(m)
}

/// MillionSfx -> 'million' | 'million ' Thousands
fn million_sfx(tokens: &[Token]) -> Option<Match> {
    if norm(tokens, 0)? != "million" {
        return None;
    }
    let m = Match {
        len: 1,
        value: 1_000_000,
    };

    if is_space(tokens, 1) {
        if let Some(inner) = thousands(&tokens[2..]) {
            return Some(Match {
                len: 2 + inner.len,
                value: 1_000_000 + inner.value,
            });
        }
    }

    Some(m)
}

/// Millions -> Thousands | Thousands ' ' MillionSfx
fn millions(tokens: &[Token]) -> Option<Match> {
    let m = thousands(tokens)?;

    if is_space(tokens, m.len) {
        if let Some(sfx) = million_sfx(&tokens[m.len + 1..]) {
            return Some(Match {
                len: m.len + 1 + sfx.len,
                value: m.value * 1_000_000 + (sfx.value - 1_000_000),
            });
        }
    }

    Some(m)
}

/// AValue -> 'a ' HundredSfx | 'a ' ThousandSfx | 'a hundred ' ThousandSfx
///         | 'a ' MillionSfx | 'a hundred ' MillionSfx
fn a_value(tokens: &[Token]) -> Option<Match> {
    if norm(tokens, 0)? != "a" || !is_space(tokens, 1) {
        return None;
    }
    let rest = &tokens[2..];

    if let Some(m) = hundred_sfx(rest) {
        let head = Match {
            len: 2 + m.len,
            value: m.value,
        };

        // Only the bare word "hundred" can precede a thousand or million
        // suffix; "a hundred and five thousand" is not a phrase.
        if m.value == 100 && is_space(rest, m.len) {
            let tail = &rest[m.len + 1..];
            if let Some(sfx) = thousand_sfx(tail) {
                return Some(Match {
                    len: head.len + 1 + sfx.len,
                    value: 100_000 + (sfx.value - 1000),
                });
            }
            if let Some(sfx) = million_sfx(tail) {
                return Some(Match {
                    len: head.len + 1 + sfx.len,
                    value: 100_000_000 + (sfx.value - 1_000_000),
                });
            }
        }

        return Some(head);
    }

    if let Some(m) = thousand_sfx(rest) {
        return Some(Match {
            len: 2 + m.len,
            value: m.value,
        });
    }
    if let Some(m) = million_sfx(rest) {
        return Some(Match {
            len: 2 + m.len,
            value: m.value,
        });
    }

    None
}

/// Match a cardinal-number phrase at the head of `tokens`
///
/// CardNum -> 'zero' | Millions | AValue. Returns the longest phrase the
/// greedy walk recognizes, or `None` when the head is not a number word.
pub fn cardinal(tokens: &[Token]) -> Option<Match> {
    if norm(tokens, 0) == Some("zero") {
        return Some(Match { len: 1, value: 0 });
    }
    a_value(tokens).or_else(|| millions(tokens))
}
