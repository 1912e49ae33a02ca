//! The ordered collection returned by every listing operation.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// An ordered sequence of records, in the order the server returned them.
///
/// `Container` is the return type of every list call. It adds no identity
/// of its own: equality and ordering are those of the underlying sequence.
///
/// # Example
///
/// ```
/// use wistia_rs::models::Container;
///
/// let names: Container<String> = vec!["intro".to_string(), "outro".to_string()].into();
/// assert_eq!(names.len(), 2);
/// assert_eq!(names[1], "outro");
/// println!("{}", names);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Container<T> {
    items: Vec<T>,
}

impl<T> Container<T> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first record, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last record, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the container, returning the records.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Serialize> Container<T> {
    /// Serialize to a compact JSON array, keeping each record's field order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.items)
    }

    /// Serialize to an indented JSON array, keeping each record's field order.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.items)
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> Index<usize> for Container<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container ({} items)", self.items.len())?;
        for (i, item) in self.items.iter().enumerate() {
            write!(f, "\n  {:>3}. {}", i + 1, item)?;
        }
        Ok(())
    }
}
