//! Read-only access to externally owned word lists.
use crate::{Error, Result};
use std::collections::HashMap;

/// Source of named word lists.
///
/// The registry is owned and populated by the host application; this
/// crate only ever reads from it.
pub trait WordListRegistry {
    /// Look up the words registered under a list name.
    fn lookup(&self, name: &str) -> Option<&[String]>;

    /// Names of every registered list.
    fn names(&self) -> Vec<&str>;
}

impl WordListRegistry for HashMap<String, Vec<String>> {
    fn lookup(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|words| words.as_slice())
    }

    fn names(&self) -> Vec<&str> {
        self.keys().map(|name| name.as_str()).collect()
    }
}

/// Flatten the named lists into a single word pool.
///
/// Lists are concatenated in input order and duplicates are kept
/// verbatim, so a word appearing in more than one list is selected
/// proportionally more often.
pub fn resolve(
    registry: &dyn WordListRegistry,
    lists: &[String],
) -> Result<Vec<String>> {
    if lists.is_empty() {
        return Err(Error::NoWordLists);
    }
    if registry.names().is_empty() {
        return Err(Error::RegistryUnavailable);
    }

    let mut words = Vec::new();
    for name in lists {
        let entries = registry
            .lookup(name)
            .ok_or_else(|| Error::UnknownList(name.clone()))?;
        words.extend(entries.iter().cloned());
    }
    Ok(words)
}
