//! Pluggable word transformations.
use crate::random::RandomnessProvider;

/// Strategy transforming a selected word before it is appended to
/// the phrase.
///
/// The entropy accounting treats modification as a binary choice that
/// doubles the effective alphabet, whatever the transform actually
/// does.
pub trait WordModifier: Send + Sync {
    /// Transform a word, drawing any randomness from `rng`.
    fn modify(&self, word: &str, rng: &dyn RandomnessProvider) -> String;
}

/// Default modifier that upper-cases the first letter of a word
/// half of the time.
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalizeFirst;

impl WordModifier for CapitalizeFirst {
    fn modify(&self, word: &str, rng: &dyn RandomnessProvider) -> String {
        if rng.next(1, 0) == 0 {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str()
                }
                None => String::new(),
            }
        } else {
            word.to_owned()
        }
    }
}
