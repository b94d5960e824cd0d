use serde::{Deserialize, Serialize};

use crate::error::ContractViolation;

/// Named string inputs bound to a program before execution.
///
/// Built from a flat `[name, value, name, value, ...]` sequence. An odd
/// number of values is rejected before anything executes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParameters {
    pairs: Vec<(String, String)>,
}

impl ExecutionParameters {
    /// No parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair up a flat sequence of names and values.
    ///
    /// # Examples
    ///
    /// ```
    /// use xta_types::ExecutionParameters;
    ///
    /// let params = ExecutionParameters::from_flat(&["p1", "v1", "p2", "v2"]).unwrap();
    /// assert_eq!(params.len(), 2);
    /// assert!(ExecutionParameters::from_flat(&["p1"]).is_err());
    /// ```
    pub fn from_flat<S: AsRef<str>>(flat: &[S]) -> Result<Self, ContractViolation> {
        if flat.len() % 2 != 0 {
            return Err(ContractViolation::OddParameterCount { len: flat.len() });
        }
        let pairs = flat
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
            .collect();
        Ok(Self { pairs })
    }

    /// Append a binding.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// The value bound to `name`; a later binding shadows an earlier one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Bindings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
