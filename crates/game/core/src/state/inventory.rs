//! Ordered item inventory.

use std::collections::HashMap;

/// Ordered list of item names; duplicates are separate instances.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    /// Number of instances of `name`.
    pub fn count(&self, name: &str) -> usize {
        self.items.iter().filter(|item| *item == name).count()
    }

    /// Appends one instance at the end.
    pub fn push(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    /// Removes the first instance of `name`. Returns false when absent.
    pub fn remove_one(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item == name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Required names not covered by the inventory, counting multiplicity.
    ///
    /// A name required twice but owned once is reported once. Reported names
    /// keep the order of `required`.
    pub fn missing<'a>(&self, required: &'a [String]) -> Vec<&'a str> {
        let mut available: HashMap<&str, usize> = HashMap::new();
        for item in &self.items {
            *available.entry(item.as_str()).or_default() += 1;
        }

        required
            .iter()
            .filter_map(|name| match available.get_mut(name.as_str()) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    None
                }
                _ => Some(name.as_str()),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for Inventory {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}
