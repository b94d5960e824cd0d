//! Order-insensitive structural comparison of two documents.
//!
//! Both documents are reduced to element trees where whitespace-only text,
//! comments and processing instructions are dropped and text is
//! whitespace-normalized. Children are paired regardless of position:
//! first exact subtree matches, then elements with the same name and text,
//! then elements with the same name. Whatever remains unpaired is reported
//! as missing or unexpected.

use std::collections::BTreeMap;
use std::fmt;

use sxd_document::dom::{ChildOfElement, ChildOfRoot, Document, Element};
use sxd_document::QName;

/// The result of comparing a baseline document to one under test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuralDiff {
    /// Every difference found, baseline-first order.
    pub differences: Vec<Difference>,
}

impl StructuralDiff {
    /// Returns `true` if the documents are equivalent.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }
}

/// A single structural difference. Paths locate the baseline element
/// (or, for unexpected elements, the element under test).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Difference {
    /// The document elements have different names.
    RootName { expected: String, actual: String },
    /// A baseline element has no counterpart under test.
    MissingElement { path: String },
    /// An element under test has no counterpart in the baseline.
    UnexpectedElement { path: String },
    /// Normalized text content differs.
    TextChanged {
        path: String,
        expected: String,
        actual: String,
    },
    AttributeMissing {
        path: String,
        name: String,
        expected: String,
    },
    AttributeUnexpected {
        path: String,
        name: String,
        actual: String,
    },
    AttributeChanged {
        path: String,
        name: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootName { expected, actual } => write!(
                f,
                "Expected document element <{expected}>\n  But got: <{actual}>"
            ),
            Self::MissingElement { path } => {
                write!(f, "Expected element {path}\n  But it is missing")
            }
            Self::UnexpectedElement { path } => {
                write!(f, "Did not expect element {path}\n  But it is present")
            }
            Self::TextChanged {
                path,
                expected,
                actual,
            } => write!(
                f,
                "Expected text of {path} to equal: '{expected}'\n  But got: '{actual}'"
            ),
            Self::AttributeMissing {
                path,
                name,
                expected,
            } => write!(
                f,
                "Expected attribute {path}/@{name}='{expected}'\n  But it is missing"
            ),
            Self::AttributeUnexpected { path, name, actual } => write!(
                f,
                "Did not expect attribute {path}/@{name}\n  But got: '{actual}'"
            ),
            Self::AttributeChanged {
                path,
                name,
                expected,
                actual,
            } => write!(
                f,
                "Expected attribute {path}/@{name} to equal: '{expected}'\n  But got: '{actual}'"
            ),
        }
    }
}

/// Compare `expected` (baseline) with `actual` (under test).
pub fn diff_documents(expected: Document<'_>, actual: Document<'_>) -> StructuralDiff {
    let mut differences = Vec::new();
    match (document_element(expected), document_element(actual)) {
        (Some(e), Some(a)) if e.name == a.name => {
            let path = format!("/{}[1]", e.name);
            compare(&e, &a, &path, &mut differences);
        }
        (e, a) => differences.push(Difference::RootName {
            expected: e.map(|n| n.name).unwrap_or_default(),
            actual: a.map(|n| n.name).unwrap_or_default(),
        }),
    }
    StructuralDiff { differences }
}

/// Normalized element tree.
#[derive(Clone, Debug)]
struct Node {
    name: String,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Node>,
    canonical: CanonicalForm,
}

/// Order-insensitive form of a whole subtree. Equal forms mean equivalent
/// subtrees; text and markup never share a field, so they cannot collide.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalForm {
    name: String,
    attributes: BTreeMap<String, String>,
    text: String,
    /// Sorted.
    children: Vec<CanonicalForm>,
}

fn document_element(document: Document<'_>) -> Option<Node> {
    document.root().children().into_iter().find_map(|child| match child {
        ChildOfRoot::Element(element) => Some(build(element)),
        _ => None,
    })
}

fn build(element: Element<'_>) -> Node {
    let attributes: BTreeMap<String, String> = element
        .attributes()
        .into_iter()
        .map(|attr| (qualified(attr.name()), attr.value().to_string()))
        .collect();

    let mut text = String::new();
    let mut children = Vec::new();
    for child in element.children() {
        match child {
            ChildOfElement::Element(e) => children.push(build(e)),
            ChildOfElement::Text(t) => text.push_str(t.text()),
            _ => {}
        }
    }
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let name = qualified(element.name());

    let mut child_forms: Vec<CanonicalForm> =
        children.iter().map(|c| c.canonical.clone()).collect();
    child_forms.sort_unstable();
    let canonical = CanonicalForm {
        name: name.clone(),
        attributes: attributes.clone(),
        text: text.clone(),
        children: child_forms,
    };

    Node {
        name,
        attributes,
        text,
        children,
        canonical,
    }
}

/// `{uri}local` for namespaced names, `local` otherwise.
fn qualified(name: QName<'_>) -> String {
    match name.namespace_uri() {
        Some(uri) => format!("{{{uri}}}{}", name.local_part()),
        None => name.local_part().to_string(),
    }
}

fn compare(expected: &Node, actual: &Node, path: &str, out: &mut Vec<Difference>) {
    if expected.canonical == actual.canonical {
        return;
    }

    if expected.text != actual.text {
        out.push(Difference::TextChanged {
            path: path.to_string(),
            expected: expected.text.clone(),
            actual: actual.text.clone(),
        });
    }
    compare_attributes(expected, actual, path, out);

    let pairing = pair_children(&expected.children, &actual.children);
    let expected_paths = child_paths(&expected.children, path);
    let actual_paths = child_paths(&actual.children, path);

    for (ei, slot) in pairing.iter().enumerate() {
        match slot {
            Some(ai) => compare(
                &expected.children[ei],
                &actual.children[*ai],
                &expected_paths[ei],
                out,
            ),
            None => out.push(Difference::MissingElement {
                path: expected_paths[ei].clone(),
            }),
        }
    }

    let mut paired = vec![false; actual.children.len()];
    for ai in pairing.iter().flatten() {
        paired[*ai] = true;
    }
    for (ai, used) in paired.iter().enumerate() {
        if !used {
            out.push(Difference::UnexpectedElement {
                path: actual_paths[ai].clone(),
            });
        }
    }
}

fn compare_attributes(expected: &Node, actual: &Node, path: &str, out: &mut Vec<Difference>) {
    for (name, value) in &expected.attributes {
        match actual.attributes.get(name) {
            None => out.push(Difference::AttributeMissing {
                path: path.to_string(),
                name: name.clone(),
                expected: value.clone(),
            }),
            Some(other) if other != value => out.push(Difference::AttributeChanged {
                path: path.to_string(),
                name: name.clone(),
                expected: value.clone(),
                actual: other.clone(),
            }),
            Some(_) => {}
        }
    }
    for (name, value) in &actual.attributes {
        if !expected.attributes.contains_key(name) {
            out.push(Difference::AttributeUnexpected {
                path: path.to_string(),
                name: name.clone(),
                actual: value.clone(),
            });
        }
    }
}

/// For each expected child, the index of its actual counterpart.
fn pair_children(expected: &[Node], actual: &[Node]) -> Vec<Option<usize>> {
    let mut pairing: Vec<Option<usize>> = vec![None; expected.len()];
    let mut taken = vec![false; actual.len()];

    let passes: [fn(&Node, &Node) -> bool; 3] = [
        |e, a| e.canonical == a.canonical,
        |e, a| e.name == a.name && e.text == a.text,
        |e, a| e.name == a.name,
    ];

    for matches in passes {
        for (ei, e) in expected.iter().enumerate() {
            if pairing[ei].is_some() {
                continue;
            }
            let found = actual
                .iter()
                .enumerate()
                .find(|(ai, a)| !taken[*ai] && matches(e, a))
                .map(|(ai, _)| ai);
            if let Some(ai) = found {
                taken[ai] = true;
                pairing[ei] = Some(ai);
            }
        }
    }
    pairing
}

/// `parent/name[n]` paths, `n` counting same-named siblings from 1.
fn child_paths(children: &[Node], parent: &str) -> Vec<String> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    children
        .iter()
        .map(|child| {
            let n = seen.entry(child.name.as_str()).or_insert(0);
            *n += 1;
            format!("{parent}/{}[{n}]", child.name)
        })
        .collect()
}
