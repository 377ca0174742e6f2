//! Numwords is a grammar-based toolkit for English cardinal numbers.
//!
//! A fixed context-free grammar describes number phrases from "zero" up to
//! the hundreds of millions, including the informal forms that use "a" in
//! place of "one" ("a hundred", "a million"). The crate walks that grammar
//! in both directions: it enumerates or probabilistically samples the
//! phrases the grammar derives, and it recognizes phrases in running text in
//! order to rewrite them as digits.
//!
//! # Example
//!
//! ```rust
//! use numwords::cardinal;
//!
//! let grammar = cardinal::grammar().unwrap();
//!
//! // The shallowest derivation is the single word "zero".
//! let mut sentences = grammar.sentences(1);
//! assert_eq!(sentences.next().unwrap().text(), "zero");
//! assert!(sentences.next().is_none());
//!
//! // Deeper bounds reach the informal forms.
//! let texts: Vec<String> = grammar.sentences(4).map(|s| s.text()).collect();
//! assert!(texts.contains(&"a million".to_string()));
//! ```

pub mod cardinal;
pub mod digitize;
pub mod enumerate;
pub mod grammar;
pub mod matcher;
pub mod sample;
pub mod tokens;
pub mod utils;

pub use enumerate::{Sentence, Sentences};
pub use grammar::{Element, Grammar, GrammarBuilder, JsonGrammar, Production};
pub use matcher::Match;
pub use sample::{Sampler, SamplerConfig};
pub use utils::{Error, Result};
