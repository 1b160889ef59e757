// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Provider registration table
//!
//! Maps a provider identifier to a factory producing its `TestCase`
//! collection. The table is filled at startup; nothing is looked up by
//! reflection.

use std::collections::HashMap;
use std::fmt;

use super::contract::TestCaseCollection;

type CollectionFactory = Box<dyn Fn() -> Box<dyn TestCaseCollection>>;

/// Registry of known test providers
#[derive(Default)]
pub struct ProviderRegistry {
    factories: HashMap<String, CollectionFactory>,
}

impl ProviderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in provider suite
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::suites::register_all(&mut registry);
        registry
    }

    /// Register (or replace) a provider
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn TestCaseCollection> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Register a provider whose `TestCase` type is default-constructible
    pub fn register_default<C>(&mut self, name: impl Into<String>)
    where
        C: TestCaseCollection + Default + 'static,
    {
        self.register(name, || Box::new(C::default()));
    }

    /// Instantiate the collection of a provider
    pub fn resolve(&self, name: &str) -> Option<Box<dyn TestCaseCollection>> {
        self.factories.get(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered identifiers, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
