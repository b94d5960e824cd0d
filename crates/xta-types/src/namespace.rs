use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Prefix to namespace URI bindings used when compiling path queries.
///
/// The last binding for a prefix wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceBindings {
    prefixes: BTreeMap<String, String>,
}

impl NamespaceBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `uri`, replacing any earlier binding.
    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), uri.into());
    }

    /// The URI bound to `prefix`, if any.
    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Bindings in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut ns = NamespaceBindings::new();
        ns.bind("dc", "urn:first");
        ns.bind("dc", "http://purl.org/dc/elements/1.1/");
        assert_eq!(ns.uri("dc"), Some("http://purl.org/dc/elements/1.1/"));
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn unbound_prefix_is_none() {
        let ns = NamespaceBindings::new();
        assert!(ns.uri("ns1").is_none());
        assert!(ns.is_empty());
    }
}
