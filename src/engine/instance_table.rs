// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::errors::MeshError;
use crate::traits::Component;

/// Named components in insertion order, with lookup by name.
#[derive(Debug, Default)]
pub struct InstanceTable {
    entries: Vec<(String, Component)>,
    index: HashMap<String, usize>,
}

impl InstanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, component: Component) -> Result<(), MeshError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(MeshError::DuplicateInstanceName(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, component));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.index
            .get(name)
            .and_then(|&i| self.entries.get(i))
            .map(|(_, component)| component)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Entries in insertion order. Reverse with `.rev()`.
    pub fn iter(&self) -> Instances<'_> {
        Instances {
            inner: self.entries.iter(),
        }
    }
}

/// Borrowing cursor over an [`InstanceTable`], yielding `(name, component)`.
#[derive(Debug, Clone)]
pub struct Instances<'a> {
    inner: std::slice::Iter<'a, (String, Component)>,
}

impl<'a> Iterator for Instances<'a> {
    type Item = (&'a str, &'a Component);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, component)| (name.as_str(), component))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Instances<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, component)| (name.as_str(), component))
    }
}

impl ExactSizeIterator for Instances<'_> {}

impl<'a> IntoIterator for &'a InstanceTable {
    type Item = (&'a str, &'a Component);
    type IntoIter = Instances<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{ExampleParams, ExampleProcessor, ExampleService};
    use std::sync::Arc;

    fn component(service: bool) -> Component {
        let params = Arc::new(ExampleParams::default());
        if service {
            ExampleService::create(params)
        } else {
            ExampleProcessor::create(params)
        }
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut table = InstanceTable::new();
        for name in ["zulu", "alpha", "mike"] {
            table.insert(name, component(false)).unwrap();
        }

        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);

        let reversed: Vec<&str> = table.iter().rev().map(|(name, _)| name).collect();
        assert_eq!(reversed, vec!["mike", "alpha", "zulu"]);
        assert_eq!(table.iter().len(), 3);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut table = InstanceTable::new();
        table.insert("Instance1", component(false)).unwrap();

        let result = table.insert("Instance1", component(true));
        assert!(matches!(result, Err(MeshError::DuplicateInstanceName(n)) if n == "Instance1"));
        assert_eq!(table.len(), 1);
        assert!(!table.get("Instance1").unwrap().is_service());
    }

    #[test]
    fn test_lookup_and_clear() {
        let mut table = InstanceTable::new();
        table.insert("Instance1", component(false)).unwrap();
        table.insert("Instance2", component(true)).unwrap();

        assert!(table.get("Instance2").unwrap().is_service());
        assert!(table.get("Instance3").is_none());

        table.clear();
        assert!(table.is_empty());
        assert!(table.get("Instance1").is_none());
        assert_eq!(table.iter().count(), 0);
    }
}
