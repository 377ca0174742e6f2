//! Probabilistic thinning of an enumerated sentence stream.
//!
//! The sampler walks a sentence sequence front to back and emits each
//! sentence with the current probability. Every emission multiplies that
//! probability by a decay factor, so the front of the enumeration is sampled
//! richer than the tail; skipped sentences leave the probability untouched.

use std::io::Write;

use rand::Rng;

use crate::enumerate::Sentence;
use crate::utils::Result;

/// Configuration for the emission loop
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    /// Emission probability for the first sentence
    pub probability: f64,
    /// Factor applied to the probability after each emission
    pub decay: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            probability: 0.3,
            decay: 0.9,
        }
    }
}

/// The emission loop with its decaying acceptance probability
///
/// The probability is owned by the sampler instance, so independent runs
/// never share state. After `k` emissions the probability is exactly the
/// initial value times `decay^k`; it approaches zero but never reaches it.
#[derive(Debug)]
pub struct Sampler {
    probability: f64,
    decay: f64,
}

impl Sampler {
    /// Create a sampler from a configuration
    pub fn new(config: SamplerConfig) -> Self {
        Sampler {
            probability: config.probability,
            decay: config.decay,
        }
    }

    /// The current acceptance probability
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Decide a single sentence from a uniform draw in `[0, 1)`
    ///
    /// Returns whether the sentence is emitted. The probability decays only
    /// on acceptance, never on a skip.
    pub fn accept(&mut self, draw: f64) -> bool {
        if draw < self.probability {
            self.probability *= self.decay;
            true
        } else {
            false
        }
    }

    /// Consume `sentences`, writing each accepted one to `out` on its own
    /// line
    ///
    /// Returns the number of sentences emitted. Write failures propagate
    /// immediately.
    pub fn run<I, R, W>(&mut self, sentences: I, rng: &mut R, out: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = Sentence>,
        R: Rng,
        W: Write,
    {
        let mut emitted = 0;
        for sentence in sentences {
            let draw = rng.gen_range(0.0..1.0);
            if self.accept(draw) {
                writeln!(out, "{}", sentence)?;
                emitted += 1;
            }
        }
        Ok(emitted)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler::new(SamplerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cardinal;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_accept_decays_only_on_emission() {
        let mut sampler = Sampler::default();
        assert_eq!(sampler.probability(), 0.3);

        // A losing draw leaves the probability untouched.
        assert!(!sampler.accept(0.9));
        assert_eq!(sampler.probability(), 0.3);

        // A winning draw decays it once.
        assert!(sampler.accept(0.0));
        assert_eq!(sampler.probability(), 0.3 * 0.9);

        // The boundary draw equal to the probability is a skip.
        let probability = sampler.probability();
        assert!(!sampler.accept(probability));
        assert_eq!(sampler.probability(), probability);
    }

    #[test]
    fn test_probability_after_k_emissions() {
        let mut sampler = Sampler::default();
        let mut expected = 0.3;
        for _ in 0..50 {
            assert!(sampler.accept(0.0));
            expected *= 0.9;
            assert_eq!(sampler.probability(), expected);
        }
        assert!(sampler.probability() > 0.0);
    }

    #[test]
    fn test_probability_is_non_increasing() {
        let mut sampler = Sampler::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut previous = sampler.probability();
        for _ in 0..1000 {
            sampler.accept(rng.gen_range(0.0..1.0));
            assert!(sampler.probability() <= previous);
            previous = sampler.probability();
        }
    }

    #[test]
    fn test_run_emits_a_subsequence_in_order() {
        let grammar = cardinal::grammar().unwrap();
        let all: Vec<String> = grammar
            .sentences(5)
            .map(|sentence| sentence.text())
            .collect();

        let mut sampler = Sampler::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut buffer = Vec::new();
        let emitted = sampler
            .run(grammar.sentences(5), &mut rng, &mut buffer)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), emitted);

        // Every emitted line is a sentence of the enumeration, and the
        // emission order follows the enumeration order.
        let mut cursor = 0;
        for line in &lines {
            let position = all[cursor..]
                .iter()
                .position(|text| text == line)
                .expect("emitted line not found in enumeration order");
            cursor += position + 1;
        }
    }

    #[test]
    fn test_run_probability_matches_emission_count() {
        let grammar = cardinal::grammar().unwrap();
        let mut sampler = Sampler::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut buffer = Vec::new();
        let emitted = sampler
            .run(grammar.sentences(5), &mut rng, &mut buffer)
            .unwrap();

        let mut expected = 0.3;
        for _ in 0..emitted {
            expected *= 0.9;
        }
        assert_eq!(sampler.probability(), expected);
    }

    #[test]
    fn test_custom_config() {
        let mut sampler = Sampler::new(SamplerConfig {
            probability: 1.0,
            decay: 0.5,
        });
        assert!(sampler.accept(0.999));
        assert_eq!(sampler.probability(), 0.5);
    }
}
