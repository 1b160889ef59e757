// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Suite loader - resolves providers and extracts their test cases

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::contract::UnitCase;
use super::error::HarnessError;
use super::registry::ProviderRegistry;

/// One contributed module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestProvider {
    pub name: String,
}

impl TestProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Test cases extracted from a single provider, in provider order
#[derive(Debug)]
pub struct LoadedCollection {
    pub provider: TestProvider,
    pub cases: Vec<UnitCase>,
}

/// Loads one collection per configured provider
pub struct SuiteLoader<'a> {
    registry: &'a ProviderRegistry,
}

impl<'a> SuiteLoader<'a> {
    pub fn new(registry: &'a ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Resolve every provider, then extract the cases.
    ///
    /// All providers are resolved before any collection is returned, so a
    /// bad entry anywhere in the list means nothing runs.
    pub fn load<S: AsRef<str>>(
        &self,
        providers: &[S],
    ) -> Result<Vec<LoadedCollection>, HarnessError> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(providers.len());

        for name in providers {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(HarnessError::DuplicateProvider {
                    provider: name.to_string(),
                });
            }

            let collection =
                self.registry
                    .resolve(name)
                    .ok_or_else(|| HarnessError::ProviderContract {
                        provider: name.to_string(),
                    })?;
            debug!(provider = name, "resolved test provider");
            resolved.push((name, collection));
        }

        Ok(resolved
            .into_iter()
            .map(|(name, collection)| {
                let cases = collection.cases();
                debug!(provider = name, cases = cases.len(), "loaded test cases");
                LoadedCollection {
                    provider: TestProvider::new(name),
                    cases,
                }
            })
            .collect())
    }
}
