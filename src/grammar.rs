use std::collections::{BTreeMap, HashMap, HashSet};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::{Error, Result};

/// Represents an element in the grammar, either a terminal or a non-terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A terminal symbol (literal text, spacing included)
    Terminal(String),
    /// A non-terminal symbol (reference to another rule)
    NonTerminal(String),
}

/// Represents a production rule in the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    /// The sequence of elements in this production
    pub elements: Vec<Element>,
}

/// The complete grammar with rules for deriving sentences
///
/// Terminals carry their own spacing and punctuation; concatenating the
/// terminals of a derivation yields the finished sentence. Alternatives for a
/// non-terminal keep the order in which they were added, which fixes the
/// enumeration order of [`Grammar::sentences`](crate::enumerate).
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    /// The rules mapping non-terminals to productions
    rules: HashMap<String, Vec<Production>>,
    /// The starting symbol for derivations
    start_symbol: String,
}

impl Grammar {
    /// Create a new empty grammar with a specified start symbol
    pub fn new(start_symbol: &str) -> Self {
        Grammar {
            rules: HashMap::new(),
            start_symbol: start_symbol.to_string(),
        }
    }

    /// Add a production for a non-terminal
    ///
    /// Elements written as `"<Name>"` are non-terminal references, everything
    /// else is a literal terminal.
    pub fn add_rule(&mut self, non_terminal: &str, elements: &[&str]) -> Result<&mut Self> {
        let production = Self::parse_elements(elements)?;

        self.rules
            .entry(non_terminal.to_string())
            .or_default()
            .push(production);

        Ok(self)
    }

    /// Parse a slice of element strings into a Production
    fn parse_elements(elements: &[&str]) -> Result<Production> {
        let mut parsed_elements = Vec::new();
        let non_terminal_regex = Regex::new(r"^<([^>]+)>$").unwrap();

        for element in elements {
            if let Some(captures) = non_terminal_regex.captures(element) {
                let name = captures.get(1).unwrap().as_str();
                parsed_elements.push(Element::NonTerminal(name.to_string()));
            } else {
                parsed_elements.push(Element::Terminal((*element).to_string()));
            }
        }

        if parsed_elements.is_empty() {
            return Err(Error::EmptyProduction(
                "empty elements slice".to_string(),
            ));
        }

        Ok(Production {
            elements: parsed_elements,
        })
    }

    /// Check that the grammar is well-formed
    ///
    /// Three construction-time conditions are enforced: every referenced
    /// non-terminal has a rule, the start symbol has a rule, and every
    /// non-terminal is productive, meaning some expansion path bottoms out in
    /// terminals. Mutually recursive rules are accepted as long as at least
    /// one alternative terminates.
    pub fn validate(&self) -> Result<()> {
        let mut names: Vec<&String> = self.rules.keys().collect();
        names.sort();

        if !self.rules.contains_key(&self.start_symbol) {
            return Err(Error::UnknownNonTerminal(self.start_symbol.clone()));
        }

        for name in &names {
            for production in &self.rules[*name] {
                if production.elements.is_empty() {
                    return Err(Error::EmptyProduction((*name).clone()));
                }
                for element in &production.elements {
                    if let Element::NonTerminal(referenced) = element {
                        if !self.rules.contains_key(referenced) {
                            return Err(Error::UnknownNonTerminal(referenced.clone()));
                        }
                    }
                }
            }
        }

        // Fixpoint: a non-terminal is productive once some alternative is
        // made of terminals and already-productive non-terminals.
        let mut productive: HashSet<&str> = HashSet::new();
        loop {
            let mut changed = false;
            for name in &names {
                if productive.contains(name.as_str()) {
                    continue;
                }
                let resolves = self.rules[*name].iter().any(|production| {
                    production.elements.iter().all(|element| match element {
                        Element::Terminal(_) => true,
                        Element::NonTerminal(n) => productive.contains(n.as_str()),
                    })
                });
                if resolves {
                    productive.insert(name.as_str());
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        for name in &names {
            if !productive.contains(name.as_str()) {
                return Err(Error::Unproductive((*name).clone()));
            }
        }

        Ok(())
    }

    /// Check if the grammar contains a specific non-terminal
    pub fn has_non_terminal(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Get a reference to the grammar's rules
    pub fn rules(&self) -> &HashMap<String, Vec<Production>> {
        &self.rules
    }

    /// Get the start symbol
    pub fn start_symbol(&self) -> &str {
        &self.start_symbol
    }

    /// Collect every terminal literal appearing in the grammar
    pub fn terminals(&self) -> HashSet<&str> {
        self.rules
            .values()
            .flatten()
            .flat_map(|production| &production.elements)
            .filter_map(|element| match element {
                Element::Terminal(text) => Some(text.as_str()),
                Element::NonTerminal(_) => None,
            })
            .collect()
    }
}

/// Builder for constructing validated Grammar instances
pub struct GrammarBuilder {
    grammar: Grammar,
    error: Option<Error>,
}

impl GrammarBuilder {
    /// Create a new grammar builder
    pub fn new(start_symbol: &str) -> Self {
        GrammarBuilder {
            grammar: Grammar::new(start_symbol),
            error: None,
        }
    }

    /// Add a rule to the grammar; errors are reported by `build`
    pub fn add_rule(mut self, non_terminal: &str, elements: &[&str]) -> Self {
        if self.error.is_none() {
            if let Err(error) = self.grammar.add_rule(non_terminal, elements) {
                self.error = Some(error);
            }
        }
        self
    }

    /// Validate and build the grammar
    pub fn build(self) -> Result<Grammar> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.grammar.validate()?;
        Ok(self.grammar)
    }
}

/// On-disk JSON representation of a grammar
///
/// Rules map a non-terminal name to its list of productions, each production
/// a list of element strings in the same `"<Name>"` notation accepted by
/// [`Grammar::add_rule`]. A `BTreeMap` keeps the serialized form stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonGrammar {
    /// The starting non-terminal
    pub start: String,
    /// Productions per non-terminal
    pub rules: BTreeMap<String, Vec<Vec<String>>>,
}

impl JsonGrammar {
    /// Convert an in-memory grammar to its JSON form
    pub fn from_grammar(grammar: &Grammar) -> Self {
        let mut rules = BTreeMap::new();
        for (name, productions) in grammar.rules() {
            let serialized = productions
                .iter()
                .map(|production| {
                    production
                        .elements
                        .iter()
                        .map(|element| match element {
                            Element::Terminal(text) => text.clone(),
                            Element::NonTerminal(name) => format!("<{}>", name),
                        })
                        .collect()
                })
                .collect();
            rules.insert(name.clone(), serialized);
        }

        JsonGrammar {
            start: grammar.start_symbol().to_string(),
            rules,
        }
    }

    /// Build and validate the in-memory grammar
    pub fn into_grammar(self) -> Result<Grammar> {
        let mut grammar = Grammar::new(&self.start);
        for (name, productions) in &self.rules {
            for production in productions {
                let elements: Vec<&str> = production.iter().map(String::as_str).collect();
                grammar.add_rule(name, &elements)?;
            }
        }
        grammar.validate()?;
        Ok(grammar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elements() {
        let production =
            Grammar::parse_elements(&["hundred and ", "<Below100>"]).unwrap();

        assert_eq!(production.elements.len(), 2);

        match &production.elements[0] {
            Element::Terminal(s) => assert_eq!(s, "hundred and "),
            _ => panic!("Expected Terminal"),
        }

        match &production.elements[1] {
            Element::NonTerminal(s) => assert_eq!(s, "Below100"),
            _ => panic!("Expected NonTerminal"),
        }
    }

    #[test]
    fn test_empty_production() {
        let result = Grammar::parse_elements(&[]);
        assert!(result.is_err());

        if let Err(err) = result {
            assert!(format!("{}", err).contains("Empty production"));
        }
    }

    #[test]
    fn test_builder_validates_references() {
        let result = GrammarBuilder::new("start")
            .add_rule("start", &["<missing>"])
            .build();

        match result {
            Err(Error::UnknownNonTerminal(name)) => assert_eq!(name, "missing"),
            other => panic!("Expected UnknownNonTerminal, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_builder_rejects_unproductive_cycle() {
        // A loop with no terminating alternative can never finish deriving.
        let result = GrammarBuilder::new("loop")
            .add_rule("loop", &["<loop>"])
            .build();

        match result {
            Err(Error::Unproductive(name)) => assert_eq!(name, "loop"),
            other => panic!("Expected Unproductive, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_mutual_recursion_with_base_case_is_valid() {
        let result = GrammarBuilder::new("list")
            .add_rule("list", &["<item>"])
            .add_rule("list", &["<item>", ", ", "<list>"])
            .add_rule("item", &["x"])
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_start_symbol() {
        let result = GrammarBuilder::new("start")
            .add_rule("other", &["x"])
            .build();

        match result {
            Err(Error::UnknownNonTerminal(name)) => assert_eq!(name, "start"),
            other => panic!("Expected UnknownNonTerminal, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let grammar = GrammarBuilder::new("greeting")
            .add_rule("greeting", &["hello ", "<subject>"])
            .add_rule("subject", &["world"])
            .add_rule("subject", &["rust"])
            .build()
            .unwrap();

        let json = JsonGrammar::from_grammar(&grammar);
        let restored = json.into_grammar().unwrap();

        assert_eq!(restored, grammar);
    }

    #[test]
    fn test_terminals() {
        let grammar = GrammarBuilder::new("start")
            .add_rule("start", &["a ", "<tail>"])
            .add_rule("tail", &["b"])
            .build()
            .unwrap();

        let terminals = grammar.terminals();
        assert!(terminals.contains("a "));
        assert!(terminals.contains("b"));
        assert!(!terminals.contains("tail"));
    }
}
