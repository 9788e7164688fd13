//! Passphrase generation under an entropy budget.
use secrecy::SecretString;
use std::fmt;
use std::sync::Arc;
use zxcvbn::{zxcvbn, Entropy};

use crate::{
    entropy,
    modifier::{CapitalizeFirst, WordModifier},
    random::{OsRandom, RandomnessProvider},
    registry::{self, WordListRegistry},
    Error, Result, DEFAULT_SEPARATORS, MAX_ENTROPY_BITS,
    MIN_ENTROPY_BITS, MIN_WORD_COUNT,
};

/// Measure the strength of a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Generate a passphrase with the default configuration.
pub fn generate_passphrase(
    registry: &dyn WordListRegistry,
) -> Result<PhraseResult> {
    PhraseConfig::default().generate(registry)
}

/// Generated passphrase result.
#[derive(Debug, Clone)]
pub struct PhraseResult {
    /// The generated passphrase.
    pub phrase: SecretString,
    /// The entropy bits accounted to the phrase.
    ///
    /// Always greater than or equal to the target bits requested
    /// in the configuration.
    pub bits: f64,
}

/// Options for passphrase generation.
///
/// Setter methods consume and return the value so a configuration
/// can be assembled in a chain; once built it is never mutated by
/// generation.
#[derive(Clone)]
pub struct PhraseConfig {
    bits: f64,
    separators: String,
    word_lists: Vec<String>,
    modifiers_enabled: bool,
    separators_enabled: bool,
    randomness: Option<Arc<dyn RandomnessProvider>>,
    modifier: Option<Arc<dyn WordModifier>>,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            bits: 50.0,
            separators: DEFAULT_SEPARATORS.to_owned(),
            word_lists: vec!["default".to_owned()],
            modifiers_enabled: true,
            separators_enabled: true,
            randomness: None,
            modifier: None,
        }
    }
}

impl fmt::Debug for PhraseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhraseConfig")
            .field("bits", &self.bits)
            .field("separators", &self.separators)
            .field("word_lists", &self.word_lists)
            .field("modifiers_enabled", &self.modifiers_enabled)
            .field("separators_enabled", &self.separators_enabled)
            .field("randomness", &self.randomness.is_some())
            .field("modifier", &self.modifier.is_some())
            .finish()
    }
}

impl PhraseConfig {
    /// Create a configuration with the default options.
    pub fn new() -> Self {
        Default::default()
    }

    /// Target entropy in bits; must be in
    /// [`MIN_ENTROPY_BITS`, `MAX_ENTROPY_BITS`].
    pub fn bits(mut self, bits: f64) -> Self {
        self.bits = bits;
        self
    }

    /// Separator alphabet; an empty string disables separator
    /// insertion.
    pub fn separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    /// Names of the word lists to draw from, resolved against the
    /// registry passed to [`generate`](Self::generate).
    pub fn word_lists<I, S>(mut self, lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.word_lists = lists.into_iter().map(Into::into).collect();
        self
    }

    /// Toggle word modification, which doubles the effective word
    /// alphabet for entropy accounting.
    pub fn enable_modifiers(mut self, enabled: bool) -> Self {
        self.modifiers_enabled = enabled;
        self
    }

    /// Toggle separator insertion between words.
    pub fn enable_separators(mut self, enabled: bool) -> Self {
        self.separators_enabled = enabled;
        self
    }

    /// Replace the default randomness provider.
    pub fn randomness(
        mut self,
        provider: Arc<dyn RandomnessProvider>,
    ) -> Self {
        self.randomness = Some(provider);
        self
    }

    /// Replace the default word modifier.
    pub fn modifier(mut self, modifier: Arc<dyn WordModifier>) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Generate a passphrase.
    ///
    /// Words and separators are appended until the entropy budget is
    /// exhausted; every validation failure happens before the first
    /// word is drawn so no partial phrase is ever produced.
    pub fn generate(
        &self,
        registry: &dyn WordListRegistry,
    ) -> Result<PhraseResult> {
        if self.bits < MIN_ENTROPY_BITS || self.bits > MAX_ENTROPY_BITS {
            return Err(Error::EntropyRange(
                self.bits,
                MIN_ENTROPY_BITS,
                MAX_ENTROPY_BITS,
            ));
        }

        let words = registry::resolve(registry, &self.word_lists)?;
        if words.len() < MIN_WORD_COUNT {
            return Err(Error::WordCountTooFew(
                words.len(),
                MIN_WORD_COUNT,
            ));
        }

        let separators: Vec<char> = self.separators.chars().collect();
        let separator_bits = entropy::bits(separators.len());

        let max_index = words.len();
        let alphabet = if self.modifiers_enabled {
            max_index * 2
        } else {
            max_index
        };
        let word_bits = entropy::bits(alphabet);
        if word_bits < 1.0 {
            return Err(Error::WordEntropyTooLow(word_bits, 1.0));
        }

        let default_rng = OsRandom;
        let rng: &dyn RandomnessProvider = self
            .randomness
            .as_deref()
            .unwrap_or(&default_rng);
        let default_modifier = CapitalizeFirst;
        let modifier: &dyn WordModifier = self
            .modifier
            .as_deref()
            .unwrap_or(&default_modifier);

        tracing::debug!(
            words = max_index,
            word_bits,
            separators = separators.len(),
            separator_bits,
            "genphrase"
        );

        // Every pass consumes at least word_bits which is at least
        // one bit, so this bound is exact.
        let max_draws = (self.bits / word_bits).ceil() as usize;

        let mut remaining = self.bits;
        let mut phrase = String::new();
        for _ in 0..max_draws {
            if remaining <= 0.0 {
                break;
            }

            let index = rng.next(max_index - 1, 0);
            let word = &words[index];
            if self.modifiers_enabled {
                phrase.push_str(&modifier.modify(word, rng));
            } else {
                phrase.push_str(word);
            }
            remaining -= word_bits;

            if remaining > separator_bits
                && self.separators_enabled
                && !separators.is_empty()
            {
                let separator =
                    separators[rng.next(separators.len() - 1, 0)];
                phrase.push(separator);
                remaining -= separator_bits;
            }
        }

        Ok(PhraseResult {
            phrase: SecretString::from(phrase),
            bits: self.bits - remaining,
        })
    }

    /// Generate multiple passphrases.
    pub fn generate_many(
        &self,
        registry: &dyn WordListRegistry,
        count: usize,
    ) -> Result<Vec<PhraseResult>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.generate(registry)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    /// Provider that always returns the lower bound.
    struct MinRandom;

    impl RandomnessProvider for MinRandom {
        fn next(&self, _max: usize, min: usize) -> usize {
            min
        }
    }

    /// Modifier that leaves words untouched.
    struct Identity;

    impl WordModifier for Identity {
        fn modify(
            &self,
            word: &str,
            _rng: &dyn RandomnessProvider,
        ) -> String {
            word.to_owned()
        }
    }

    fn registry_with(count: usize) -> HashMap<String, Vec<String>> {
        let words =
            (0..count).map(|i| format!("word{:04}", i)).collect();
        let mut map = HashMap::new();
        map.insert("default".to_owned(), words);
        map
    }

    #[test]
    fn genphrase_default() -> Result<()> {
        let registry = registry_with(1024);
        let result = generate_passphrase(&registry)?;
        assert!(!result.phrase.expose_secret().is_empty());
        assert!(result.bits >= 50.0);
        Ok(())
    }

    #[test]
    fn genphrase_bits_too_low() {
        let registry = registry_with(1024);
        let result =
            PhraseConfig::new().bits(25.9).generate(&registry);
        assert!(matches!(result, Err(Error::EntropyRange(..))));
    }

    #[test]
    fn genphrase_bits_too_high() {
        let registry = registry_with(1024);
        let result =
            PhraseConfig::new().bits(120.1).generate(&registry);
        assert!(matches!(result, Err(Error::EntropyRange(..))));
    }

    #[test]
    fn genphrase_word_count_boundary() -> Result<()> {
        let result =
            PhraseConfig::new().generate(&registry_with(19));
        assert!(matches!(
            result,
            Err(Error::WordCountTooFew(19, 20))
        ));

        PhraseConfig::new().generate(&registry_with(20))?;
        Ok(())
    }

    #[test]
    fn genphrase_unknown_list() {
        let registry = registry_with(1024);
        let result = PhraseConfig::new()
            .word_lists(["nonexistent"])
            .generate(&registry);
        match result {
            Err(Error::UnknownList(name)) => {
                assert_eq!("nonexistent", name)
            }
            _ => panic!("expected unknown list error"),
        }
    }

    #[test]
    fn genphrase_reproducible() -> Result<()> {
        let registry = registry_with(1024);
        let config = PhraseConfig::new()
            .randomness(Arc::new(MinRandom))
            .modifier(Arc::new(Identity));
        let first = config.generate(&registry)?;
        let second = config.generate(&registry)?;
        assert_eq!(
            first.phrase.expose_secret(),
            second.phrase.expose_secret()
        );
        assert_eq!(first.bits, second.bits);
        Ok(())
    }

    #[test]
    fn genphrase_word_count_matches_budget() -> Result<()> {
        // 1024 words with modifiers disabled is 10.0 bits per word,
        // so a 26 bit budget is spent in exactly three draws.
        let registry = registry_with(1024);
        let result = PhraseConfig::new()
            .bits(26.0)
            .enable_modifiers(false)
            .enable_separators(false)
            .randomness(Arc::new(MinRandom))
            .generate(&registry)?;
        assert_eq!(
            "word0000".repeat(3),
            result.phrase.expose_secret()
        );
        assert_eq!(30.0, result.bits);
        Ok(())
    }

    #[test]
    fn genphrase_separator_threshold() -> Result<()> {
        // A single separator carries zero bits, so one is inserted
        // after every word except the last.
        let registry = registry_with(1024);
        let result = PhraseConfig::new()
            .bits(26.0)
            .separators("-")
            .enable_modifiers(false)
            .randomness(Arc::new(MinRandom))
            .generate(&registry)?;
        assert_eq!(
            "word0000-word0000-word0000",
            result.phrase.expose_secret()
        );
        assert!(!result.phrase.expose_secret().ends_with('-'));
        Ok(())
    }

    #[test]
    fn genphrase_empty_separators_disable_insertion() -> Result<()> {
        let registry = registry_with(1024);
        let result = PhraseConfig::new()
            .separators("")
            .enable_modifiers(false)
            .randomness(Arc::new(MinRandom))
            .generate(&registry)?;
        assert!(result
            .phrase
            .expose_secret()
            .chars()
            .all(char::is_alphanumeric));
        Ok(())
    }

    #[test]
    fn genphrase_modifier_capitalizes() -> Result<()> {
        // MinRandom selects zero in the modifier coin toss, so every
        // word is capitalized.
        let registry = registry_with(1024);
        let result = PhraseConfig::new()
            .bits(26.0)
            .enable_separators(false)
            .randomness(Arc::new(MinRandom))
            .generate(&registry)?;
        assert!(result
            .phrase
            .expose_secret()
            .starts_with("Word0000"));
        Ok(())
    }

    #[test]
    fn genphrase_many() -> Result<()> {
        let registry = registry_with(1024);
        let count = 5;
        let results = PhraseConfig::new()
            .generate_many(&registry, count)?;
        assert_eq!(count, results.len());
        for result in results {
            assert!(!result.phrase.expose_secret().is_empty());
        }
        Ok(())
    }

    #[test]
    fn genphrase_measure_entropy() -> Result<()> {
        let registry = registry_with(1024);
        let result = generate_passphrase(&registry)?;
        let entropy =
            measure_entropy(result.phrase.expose_secret(), &[]);
        assert!(entropy.guesses() > 0);
        Ok(())
    }
}
