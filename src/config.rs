// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Operator configuration read once from the environment at start-up.
//!
//! Nothing in the reconciliation path reads the environment; the loaded
//! [`OperatorConfig`] is handed to the reconciler through the shared context.

use crate::constants::{
    DEFAULT_OPERATOR_NAMESPACE, ENV_EXTRA_RECORD, ENV_FEDRAMP, ENV_HOSTED_ZONE_ID,
    ENV_OPERATOR_NAMESPACE,
};

/// Environment-derived settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorConfig {
    /// Label of an extra control plane record (`<label>.<cluster>.<base domain>`)
    /// added to the default API certificate.
    pub extra_record: Option<String>,

    /// FedRAMP compliance mode.
    pub fedramp: bool,

    /// Hosted zone identifier handed through to the issuance workflow's environment.
    pub hosted_zone_id: Option<String>,

    /// Namespace holding the operator `ConfigMap`.
    pub operator_namespace: String,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            extra_record: None,
            fedramp: false,
            hosted_zone_id: None,
            operator_namespace: DEFAULT_OPERATOR_NAMESPACE.to_string(),
        }
    }
}

impl OperatorConfig {
    /// Load the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            extra_record: non_empty(ENV_EXTRA_RECORD),
            fedramp: non_empty(ENV_FEDRAMP).is_some_and(|v| v.eq_ignore_ascii_case("true")),
            hosted_zone_id: non_empty(ENV_HOSTED_ZONE_ID),
            operator_namespace: non_empty(ENV_OPERATOR_NAMESPACE)
                .unwrap_or_else(|| DEFAULT_OPERATOR_NAMESPACE.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
