// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Suite composer - merges per-provider collections into one ordered suite

use super::contract::{case_identity, UnitCase};
use super::loader::{LoadedCollection, TestProvider};

/// Ordered merge of every provider's cases for a single run
#[derive(Debug, Default)]
pub struct AggregateSuite {
    collections: Vec<LoadedCollection>,
}

impl AggregateSuite {
    /// Structural merge: provider order and each provider's own case order
    /// are kept, nothing is filtered.
    pub fn compose(collections: Vec<LoadedCollection>) -> Self {
        Self { collections }
    }

    pub fn collections(&self) -> &[LoadedCollection] {
        &self.collections
    }

    pub fn providers(&self) -> impl Iterator<Item = &TestProvider> {
        self.collections.iter().map(|c| &c.provider)
    }

    /// Every case paired with its provider, in run order
    pub fn iter(&self) -> impl Iterator<Item = (&TestProvider, &UnitCase)> {
        self.collections
            .iter()
            .flat_map(|c| c.cases.iter().map(move |case| (&c.provider, case)))
    }

    /// Total number of cases
    pub fn len(&self) -> usize {
        self.collections.iter().map(|c| c.cases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn identities(&self) -> Vec<String> {
        self.iter()
            .map(|(provider, case)| case_identity(&provider.name, case.name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(provider: &str, cases: &[&str]) -> LoadedCollection {
        LoadedCollection {
            provider: TestProvider::new(provider),
            cases: cases.iter().map(|name| UnitCase::new(*name, || Ok(()))).collect(),
        }
    }

    #[test]
    fn test_compose_keeps_both_orders() {
        let suite = AggregateSuite::compose(vec![
            collection("b", &["test_z", "test_a"]),
            collection("a", &[]),
            collection("c", &["test_m"]),
        ]);

        assert_eq!(suite.len(), 3);
        assert_eq!(suite.providers().count(), 3);
        assert_eq!(
            suite.identities(),
            vec!["test_z (b.TestCase)", "test_a (b.TestCase)", "test_m (c.TestCase)"]
        );
    }

    #[test]
    fn test_empty_suite() {
        let suite = AggregateSuite::compose(Vec::new());
        assert!(suite.is_empty());
        assert_eq!(suite.iter().count(), 0);
    }
}
