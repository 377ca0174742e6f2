//! The built-in grammar for English cardinal numbers.
//!
//! Covers "zero" through the hundreds of millions, the hyphenated compounds
//! ("twenty-three"), the "hundred and" connective, and the informal forms
//! that use "a" in place of "one" ("a hundred", "a million"). Spacing and
//! hyphens live inside the terminals, so a derivation's terminals concatenate
//! directly into the finished phrase.

use crate::grammar::{Grammar, GrammarBuilder};
use crate::utils::Result;

/// The starting non-terminal of the cardinal grammar
pub const START_SYMBOL: &str = "CardNum";

/// Words for one through nine; the value of `DIGITS[i]` is `i + 1`
pub const DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Words for ten through nineteen; the value of `TEENS[i]` is `i + 10`
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for the round tens; the value of `TENS[i]` is `(i + 2) * 10`
pub const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Build the cardinal-number grammar
///
/// The rules, with alternatives in enumeration order:
///
/// ```text
/// CardNum     -> 'zero' | Millions | AValue
/// Digit       -> 'one' | .. | 'nine'
/// Teens       -> 'ten' | .. | 'nineteen'
/// SecDig      -> 'twenty' | .. | 'ninety'
/// Below100    -> Digit | Teens | SecDig | SecDig '-' Digit
/// HundredSfx  -> 'hundred' | 'hundred and ' Below100
/// Hundreds    -> Below100 | Digit ' ' HundredSfx
/// ThousandSfx -> 'thousand' | 'thousand ' Hundreds
/// Thousands   -> Hundreds | Hundreds ' ' ThousandSfx
/// MillionSfx  -> 'million' | 'million ' Thousands
/// Millions    -> Thousands | Thousands ' ' MillionSfx
/// AValue      -> 'a ' HundredSfx | 'a ' ThousandSfx | 'a hundred ' ThousandSfx
///              | 'a ' MillionSfx | 'a hundred ' MillionSfx
/// ```
pub fn grammar() -> Result<Grammar> {
    let mut builder = GrammarBuilder::new(START_SYMBOL)
        .add_rule("CardNum", &["zero"])
        .add_rule("CardNum", &["<Millions>"])
        .add_rule("CardNum", &["<AValue>"]);

    for word in DIGITS {
        builder = builder.add_rule("Digit", &[word]);
    }
    for word in TEENS {
        builder = builder.add_rule("Teens", &[word]);
    }
    for word in TENS {
        builder = builder.add_rule("SecDig", &[word]);
    }

    builder
        .add_rule("Below100", &["<Digit>"])
        .add_rule("Below100", &["<Teens>"])
        .add_rule("Below100", &["<SecDig>"])
        .add_rule("Below100", &["<SecDig>", "-", "<Digit>"])
        .add_rule("HundredSfx", &["hundred"])
        .add_rule("HundredSfx", &["hundred and ", "<Below100>"])
        .add_rule("Hundreds", &["<Below100>"])
        .add_rule("Hundreds", &["<Digit>", " ", "<HundredSfx>"])
        .add_rule("ThousandSfx", &["thousand"])
        .add_rule("ThousandSfx", &["thousand ", "<Hundreds>"])
        .add_rule("Thousands", &["<Hundreds>"])
        .add_rule("Thousands", &["<Hundreds>", " ", "<ThousandSfx>"])
        .add_rule("MillionSfx", &["million"])
        .add_rule("MillionSfx", &["million ", "<Thousands>"])
        .add_rule("Millions", &["<Thousands>"])
        .add_rule("Millions", &["<Thousands>", " ", "<MillionSfx>"])
        .add_rule("AValue", &["a ", "<HundredSfx>"])
        .add_rule("AValue", &["a ", "<ThousandSfx>"])
        .add_rule("AValue", &["a hundred ", "<ThousandSfx>"])
        .add_rule("AValue", &["a ", "<MillionSfx>"])
        .add_rule("AValue", &["a hundred ", "<MillionSfx>"])
        .build()
}
