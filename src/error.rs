use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no word lists were requested")]
    NoWordLists,

    #[error("word list registry is empty or unavailable")]
    RegistryUnavailable,

    #[error(r#"unknown word list "{0}""#)]
    UnknownList(String),

    #[error("bits must be between {1} and {2}, got {0}")]
    EntropyRange(f64, f64, f64),

    #[error("word pool has {0} words, at least {1} are required")]
    WordCountTooFew(usize, usize),

    #[error("words carry {0} bits of entropy, at least {1} is required")]
    WordEntropyTooLow(f64, f64),
}
