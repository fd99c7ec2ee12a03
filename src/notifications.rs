// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Source of the notification email address registered with the certificate authority.

use crate::constants::{DEFAULT_NOTIFICATION_EMAIL_KEY, OPERATOR_CONFIG_MAP};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use std::collections::BTreeMap;

#[cfg(test)]
use mockall::automock;

/// Provides the default notification email address for new certificate requests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotificationEmailProvider: Send + Sync {
    /// Return the default notification email address.
    async fn default_notification_email(&self) -> Result<String>;
}

/// Reads the address from the operator `ConfigMap`.
#[derive(Clone)]
pub struct ConfigMapEmailProvider {
    client: Client,
    namespace: String,
}

impl ConfigMapEmailProvider {
    /// Create a provider reading `certman-operator` in `namespace`.
    #[must_use]
    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }
}

#[async_trait]
impl NotificationEmailProvider for ConfigMapEmailProvider {
    async fn default_notification_email(&self) -> Result<String> {
        let api: Api<ConfigMap> = Api::namespaced(self.client.clone(), &self.namespace);
        let config_map = api
            .get_opt(OPERATOR_CONFIG_MAP)
            .await
            .map_err(|e| Error::NotificationEmail(e.to_string()))?
            .ok_or_else(|| {
                Error::NotificationEmail(format!(
                    "ConfigMap {}/{} not found",
                    self.namespace, OPERATOR_CONFIG_MAP
                ))
            })?;

        email_from_config_data(config_map.data.as_ref()).ok_or_else(|| {
            Error::NotificationEmail(format!(
                "key {} missing or empty in ConfigMap {}/{}",
                DEFAULT_NOTIFICATION_EMAIL_KEY, self.namespace, OPERATOR_CONFIG_MAP
            ))
        })
    }
}

/// Extract a non-empty notification address from `ConfigMap` data.
#[must_use]
pub fn email_from_config_data(data: Option<&BTreeMap<String, String>>) -> Option<String> {
    data?
        .get(DEFAULT_NOTIFICATION_EMAIL_KEY)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_from_config_data_present() {
        let mut data = BTreeMap::new();
        data.insert(
            DEFAULT_NOTIFICATION_EMAIL_KEY.to_string(),
            " sre@example.com\n".to_string(),
        );

        assert_eq!(
            email_from_config_data(Some(&data)).as_deref(),
            Some("sre@example.com")
        );
    }

    #[test]
    fn test_email_from_config_data_missing_or_blank() {
        assert!(email_from_config_data(None).is_none());

        let mut data = BTreeMap::new();
        data.insert("unrelated".to_string(), "value".to_string());
        assert!(email_from_config_data(Some(&data)).is_none());

        data.insert(DEFAULT_NOTIFICATION_EMAIL_KEY.to_string(), "   ".to_string());
        assert!(email_from_config_data(Some(&data)).is_none());
    }
}
