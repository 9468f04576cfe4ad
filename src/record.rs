use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One decoded file: original filename plus its full text content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Filename as reported by the handle (or entry path inside an archive)
    pub name: String,
    /// Whole-file text content, lossy UTF-8
    pub content: String,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Hex-encoded SHA-256 digest of the content
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// A result element that is either a single value or a group of nested
/// elements (an expanded archive nests its records one level down)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Number of leaves reachable from this element
    pub fn leaf_count(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::List(items) => items.iter().map(Nested::leaf_count).sum(),
        }
    }

    fn drain_into(self, out: &mut Vec<T>) {
        match self {
            Nested::Leaf(value) => out.push(value),
            Nested::List(items) => {
                for item in items {
                    item.drain_into(out);
                }
            }
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Nested::List(values.into_iter().map(Nested::Leaf).collect())
    }
}

/// Collection of possibly-nested results as returned by a batch ingest
///
/// Leaf order is insertion order; `simplify` walks groups depth-first
/// left-to-right, so relative leaf order survives flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet<T>(pub Vec<Nested<T>>);

impl<T> RecordSet<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, element: Nested<T>) {
        self.0.push(element);
    }

    /// Number of top-level elements (an archive group counts as one)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of leaves across all groups
    pub fn leaf_count(&self) -> usize {
        self.0.iter().map(Nested::leaf_count).sum()
    }

    /// Flatten every nested group into one single-level sequence,
    /// depth-unbounded, preserving depth-first left-to-right leaf order
    pub fn simplify(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.0.len());
        for element in self.0 {
            element.drain_into(&mut out);
        }
        out
    }
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Nested<T>>> for RecordSet<T> {
    fn from(elements: Vec<Nested<T>>) -> Self {
        Self(elements)
    }
}

impl<T> IntoIterator for RecordSet<T> {
    type Item = Nested<T>;
    type IntoIter = std::vec::IntoIter<Nested<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_flat_input() {
        let set = RecordSet(vec![Nested::Leaf(1), Nested::Leaf(2), Nested::Leaf(3)]);
        assert_eq!(set.simplify(), vec![1, 2, 3]);
    }

    #[test]
    fn test_simplify_nested_groups() {
        // [[1,2],[3,[4,5]]] -> [1,2,3,4,5]
        let set = RecordSet(vec![
            Nested::List(vec![Nested::Leaf(1), Nested::Leaf(2)]),
            Nested::List(vec![
                Nested::Leaf(3),
                Nested::List(vec![Nested::Leaf(4), Nested::Leaf(5)]),
            ]),
        ]);
        assert_eq!(set.simplify(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_simplify_mixed_depths() {
        let set = RecordSet(vec![
            Nested::Leaf("a"),
            Nested::List(vec![Nested::Leaf("b"), Nested::Leaf("c")]),
            Nested::Leaf("d"),
        ]);
        assert_eq!(set.simplify(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_simplify_empty() {
        let set: RecordSet<i32> = RecordSet::new();
        assert!(set.simplify().is_empty());
    }

    #[test]
    fn test_simplify_empty_groups() {
        let set: RecordSet<i32> = RecordSet(vec![
            Nested::List(vec![]),
            Nested::Leaf(7),
            Nested::List(vec![Nested::List(vec![])]),
        ]);
        assert_eq!(set.simplify(), vec![7]);
    }

    #[test]
    fn test_leaf_count() {
        let set = RecordSet(vec![
            Nested::Leaf(1),
            Nested::List(vec![Nested::Leaf(2), Nested::List(vec![Nested::Leaf(3)])]),
        ]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.leaf_count(), 3);
    }

    #[test]
    fn test_record_digest() {
        let record = FileRecord::new("a.txt", "hello");
        // sha256("hello")
        assert_eq!(
            record.digest(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_nested_from_vec() {
        let group: Nested<i32> = vec![1, 2].into();
        assert_eq!(group.leaf_count(), 2);
    }
}
