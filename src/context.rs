// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared context for the `ClusterDeployment` controller.
//!
//! The controller hands every reconciliation an `Arc<Context>` holding:
//! - The resource store used for all reads and writes
//! - The notification email provider
//! - The operator configuration loaded at start-up

use crate::config::OperatorConfig;
use crate::notifications::{ConfigMapEmailProvider, NotificationEmailProvider};
use crate::store::{ClusterStore, KubeStore};
use kube::Client;
use std::sync::Arc;

/// Shared context passed to the reconciler.
#[derive(Clone)]
pub struct Context {
    /// Resource store for `ClusterDeployment` and `CertificateRequest` operations
    pub store: Arc<dyn ClusterStore>,

    /// Source of the default notification email address
    pub notifications: Arc<dyn NotificationEmailProvider>,

    /// Operator configuration
    pub config: OperatorConfig,
}

impl Context {
    /// Build a context from explicit collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn ClusterStore>,
        notifications: Arc<dyn NotificationEmailProvider>,
        config: OperatorConfig,
    ) -> Self {
        Self {
            store,
            notifications,
            config,
        }
    }

    /// Build the production context on top of a kube `Client`.
    ///
    /// The notification `ConfigMap` is read from `config.operator_namespace`.
    #[must_use]
    pub fn from_client(client: Client, config: OperatorConfig) -> Self {
        let store = Arc::new(KubeStore::new(client.clone()));
        let notifications = Arc::new(ConfigMapEmailProvider::new(
            client,
            config.operator_namespace.clone(),
        ));
        Self::new(store, notifications, config)
    }
}
