use std::fmt;

/// Ordered text values matched by one query, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathResult {
    values: Vec<String>,
}

impl PathResult {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// How the matched values read in a failure message: empty for no
    /// match, the value itself for one, `any of: [a, b]` for several.
    pub fn describe_actual(&self) -> String {
        match self.values.as_slice() {
            [] => String::new(),
            [single] => single.clone(),
            many => format!("any of: [{}]", many.join(", ")),
        }
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.values.join(", "))
    }
}

impl From<Vec<String>> for PathResult {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}
