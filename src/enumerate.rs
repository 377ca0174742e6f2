//! Deterministic enumeration of every sentence a grammar derives.
//!
//! The walk is depth-first: the leftmost non-terminal of a sentential form is
//! expanded first, and alternatives are tried in the order their rules were
//! added. Two iterators over the same grammar and depth bound therefore yield
//! identical sequences. Expansion depth is capped so that mutually recursive
//! rules (Thousands referencing ThousandSfx referencing Thousands) cannot
//! diverge; a branch whose non-terminal sits at the bound is dropped
//! silently.

use std::fmt;

use crate::grammar::{Element, Grammar};

/// A fully expanded derivation: an ordered sequence of terminal tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<String>,
}

impl Sentence {
    /// The terminal tokens of this sentence, in derivation order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The finished sentence: tokens concatenated with no separator
    ///
    /// Terminals embed their own spacing, so plain concatenation is the
    /// whole join.
    pub fn text(&self) -> String {
        self.tokens.concat()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// One symbol of a partially expanded sentential form
#[derive(Debug, Clone)]
enum Symbol {
    Terminal(String),
    NonTerminal { name: String, depth: usize },
}

/// Lazy iterator over every sentence derivable within the depth bound
///
/// Created by [`Grammar::sentences`]. The iterator is finite, restartable
/// (build a fresh one for the same sequence), and involves no randomness.
pub struct Sentences<'g> {
    grammar: &'g Grammar,
    max_depth: usize,
    stack: Vec<Vec<Symbol>>,
}

impl Grammar {
    /// Enumerate the sentences of this grammar, deepest nesting first pruned
    /// at `max_depth`
    ///
    /// The start symbol sits at depth 0; expanding a non-terminal at depth
    /// `d` is allowed only when `d < max_depth` and places the production's
    /// non-terminals at depth `d + 1`. With `max_depth == 0` the sequence is
    /// empty.
    pub fn sentences(&self, max_depth: usize) -> Sentences<'_> {
        let start = Symbol::NonTerminal {
            name: self.start_symbol().to_string(),
            depth: 0,
        };
        Sentences {
            grammar: self,
            max_depth,
            stack: vec![vec![start]],
        }
    }
}

impl Iterator for Sentences<'_> {
    type Item = Sentence;

    fn next(&mut self) -> Option<Sentence> {
        while let Some(form) = self.stack.pop() {
            let position = form
                .iter()
                .position(|symbol| matches!(symbol, Symbol::NonTerminal { .. }));

            let Some(position) = position else {
                // All terminals: the form is a finished sentence.
                let tokens = form
                    .into_iter()
                    .filter_map(|symbol| match symbol {
                        Symbol::Terminal(token) => Some(token),
                        Symbol::NonTerminal { .. } => None,
                    })
                    .collect();
                return Some(Sentence { tokens });
            };

            let Symbol::NonTerminal { name, depth } = &form[position] else {
                continue;
            };
            if *depth >= self.max_depth {
                // At the bound this branch has no finite expansion; it
                // contributes nothing rather than erroring.
                continue;
            }
            // A missing rule is caught by Grammar::validate; an unvalidated
            // grammar simply contributes nothing here.
            let Some(productions) = self.grammar.rules().get(name) else {
                continue;
            };

            let child_depth = depth + 1;
            // Push alternatives in reverse so the first-added rule is
            // expanded first.
            for production in productions.iter().rev() {
                let mut expanded =
                    Vec::with_capacity(form.len() + production.elements.len() - 1);
                expanded.extend(form[..position].iter().cloned());
                for element in &production.elements {
                    expanded.push(match element {
                        Element::Terminal(text) => Symbol::Terminal(text.clone()),
                        Element::NonTerminal(name) => Symbol::NonTerminal {
                            name: name.clone(),
                            depth: child_depth,
                        },
                    });
                }
                expanded.extend(form[position + 1..].iter().cloned());
                self.stack.push(expanded);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::cardinal;

    fn texts(max_depth: usize) -> Vec<String> {
        let grammar = cardinal::grammar().unwrap();
        grammar
            .sentences(max_depth)
            .map(|sentence| sentence.text())
            .collect()
    }

    #[test]
    fn test_depth_zero_is_empty() {
        assert!(texts(0).is_empty());
    }

    #[test]
    fn test_minimum_depth_yields_zero() {
        // The shallowest derivation is the single-token sentence "zero".
        assert_eq!(texts(1), vec!["zero"]);
    }

    #[test]
    fn test_depth_four_enumeration() {
        // At depth 4 the Millions branch cannot reach a word yet, so only
        // "zero" and the informal forms survive, in declaration order.
        assert_eq!(
            texts(4),
            vec![
                "zero",
                "a hundred",
                "a thousand",
                "a hundred thousand",
                "a million",
                "a hundred million",
            ]
        );
    }

    #[test]
    fn test_zero_appears_exactly_once() {
        let count = texts(6).into_iter().filter(|text| text == "zero").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        assert_eq!(texts(5), texts(5));
    }

    #[test]
    fn test_hundreds_sentence_is_reachable() {
        let grammar = cardinal::grammar().unwrap();
        let found = grammar
            .sentences(7)
            .take(2000)
            .any(|sentence| sentence.text() == "five hundred and three");
        assert!(found);
    }

    #[test]
    fn test_a_million_is_reachable() {
        assert!(texts(4).contains(&"a million".to_string()));
    }

    #[test]
    fn test_tokens_concatenate_without_separator() {
        let grammar = cardinal::grammar().unwrap();
        for sentence in grammar.sentences(5) {
            assert_eq!(sentence.text(), sentence.tokens().concat());
        }
    }

    #[test]
    fn test_all_tokens_are_grammar_literals() {
        let grammar = cardinal::grammar().unwrap();
        let terminals = grammar.terminals();
        for sentence in grammar.sentences(6).take(5000) {
            for token in sentence.tokens() {
                assert!(
                    terminals.contains(token.as_str()),
                    "token {:?} is not a grammar literal",
                    token
                );
            }
        }
    }

    #[test]
    fn test_hyphenated_compounds_are_generated() {
        let grammar = cardinal::grammar().unwrap();
        let found = grammar
            .sentences(6)
            .take(200)
            .any(|sentence| sentence.text() == "twenty-one");
        assert!(found);
    }
}
