//! Passphrase generation under an entropy budget.
//!
//! Words are drawn at random from externally supplied word lists and
//! joined by random separator characters until a caller-specified
//! amount of entropy has been spent. The random source and the word
//! modifier are pluggable strategies with sensible defaults.
//!
//! ```no_run
//! use genphrase::{generate_passphrase, WordListRegistry};
//! use std::collections::HashMap;
//!
//! # fn main() -> genphrase::Result<()> {
//! let mut registry: HashMap<String, Vec<String>> = HashMap::new();
//! registry.insert(
//!     "default".to_owned(),
//!     vec!["correct".to_owned(), "horse".to_owned() /* ... */],
//! );
//! let result = generate_passphrase(&registry)?;
//! # Ok(())
//! # }
//! ```

pub mod entropy;
mod error;
mod generator;
mod modifier;
mod random;
mod registry;

pub use error::Error;
pub use generator::{
    generate_passphrase, measure_entropy, PhraseConfig, PhraseResult,
};
pub use modifier::{CapitalizeFirst, WordModifier};
pub use random::{OsRandom, RandomnessProvider};
pub use registry::{resolve, WordListRegistry};

pub use zxcvbn;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Minimum number of words in a resolved word pool.
pub const MIN_WORD_COUNT: usize = 20;

/// Minimum target entropy in bits.
pub const MIN_ENTROPY_BITS: f64 = 26.0;

/// Maximum target entropy in bits.
pub const MAX_ENTROPY_BITS: f64 = 120.0;

/// Default separator alphabet.
pub const DEFAULT_SEPARATORS: &str = "-_!$&*+=23456789";
