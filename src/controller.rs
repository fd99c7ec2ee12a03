// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `ClusterDeployment` controller wiring.
//!
//! Watches `ClusterDeployment` resources and the `CertificateRequest` objects
//! they own, and runs one reconciliation pass per change.

use crate::constants::{ERROR_REQUEUE_DURATION_SECS, KIND_CLUSTER_DEPLOYMENT};
use crate::context::Context;
use crate::crd::{CertificateRequest, ClusterDeployment};
use crate::errors::Error;
use crate::metrics;
use crate::reconcilers::reconcile_cluster_deployment;
use futures::StreamExt;
use kube::runtime::controller::Action;
use kube::runtime::watcher::Config as WatcherConfig;
use kube::runtime::Controller;
use kube::{Api, Client, ResourceExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Reconciliation error wrapper
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ReconcileError(#[from] Error);

/// Error policy for the `ClusterDeployment` controller.
///
/// Returns an action to requeue the resource after a delay when reconciliation fails.
#[allow(clippy::needless_pass_by_value)] // Signature required by kube::runtime::Controller
pub fn error_policy(cd: Arc<ClusterDeployment>, err: &ReconcileError, _ctx: Arc<Context>) -> Action {
    error!(
        error = %err,
        namespace = ?cd.namespace(),
        name = %cd.name_any(),
        "Reconciliation error - will retry in {}s",
        ERROR_REQUEUE_DURATION_SECS
    );
    Action::requeue(Duration::from_secs(ERROR_REQUEUE_DURATION_SECS))
}

/// Reconcile wrapper for `ClusterDeployment`.
///
/// Times the pass, records metrics and waits for the next change on success.
///
/// # Errors
///
/// Returns the reconciliation error so that [`error_policy`] can requeue.
pub async fn reconcile_wrapper(
    cd: Arc<ClusterDeployment>,
    ctx: Arc<Context>,
) -> Result<Action, ReconcileError> {
    let start = Instant::now();
    let namespace = cd.namespace().unwrap_or_default();
    let name = cd.name_any();

    match reconcile_cluster_deployment(&ctx, &namespace, &name).await {
        Ok(outcome) => {
            metrics::record_reconciliation_success(KIND_CLUSTER_DEPLOYMENT, start.elapsed());
            debug!(
                "Reconciled ClusterDeployment {}/{}: {:?}",
                namespace, name, outcome
            );
            Ok(Action::await_change())
        }
        Err(e) => {
            metrics::record_reconciliation_error(KIND_CLUSTER_DEPLOYMENT, start.elapsed());
            metrics::record_error(KIND_CLUSTER_DEPLOYMENT, e.category());
            error!(
                "Failed to reconcile ClusterDeployment {}/{}: {}",
                namespace, name, e
            );
            Err(e.into())
        }
    }
}

/// Run the `ClusterDeployment` controller until a shutdown signal arrives.
///
/// # Arguments
///
/// * `client` - Kubernetes client used for the watches
/// * `context` - Shared reconciliation context
pub async fn run_controller(client: Client, context: Arc<Context>) {
    info!("Starting ClusterDeployment controller");

    let cluster_deployments = Api::<ClusterDeployment>::all(client.clone());
    let certificate_requests = Api::<CertificateRequest>::all(client);

    Controller::new(cluster_deployments, WatcherConfig::default())
        .owns(certificate_requests, WatcherConfig::default())
        .shutdown_on_signal()
        .run(reconcile_wrapper, error_policy, context)
        .for_each(|_| futures::future::ready(()))
        .await;

    info!("ClusterDeployment controller stopped");
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
