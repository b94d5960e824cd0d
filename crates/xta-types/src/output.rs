use std::borrow::Cow;

use crate::diagnostic::Diagnostics;

/// The result of one successful execution: raw output bytes plus every
/// non-fatal diagnostic raised along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformOutput {
    bytes: Vec<u8>,
    diagnostics: Diagnostics,
}

impl TransformOutput {
    pub fn new(bytes: Vec<u8>, diagnostics: Diagnostics) -> Self {
        Self { bytes, diagnostics }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Output decoded as UTF-8, replacing invalid sequences.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (Vec<u8>, Diagnostics) {
        (self.bytes, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_view_of_bytes() {
        let output = TransformOutput::new(b"bar".to_vec(), Diagnostics::new());
        assert_eq!(output.as_text(), "bar");
        assert!(output.diagnostics().is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let output = TransformOutput::new(vec![0x66, 0xff], Diagnostics::new());
        assert_eq!(output.as_text(), "f\u{fffd}");
    }
}
