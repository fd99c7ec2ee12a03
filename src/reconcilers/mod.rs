// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes reconciliation logic for certificate requests.
//!
//! The operator follows the standard level-triggered controller pattern:
//!
//! 1. **Watch** - `ClusterDeployment` changes and changes to the `CertificateRequest`
//!    objects it owns
//! 2. **Reconcile** - Compute the desired requests from the certificate bundles and
//!    compare them with the stored ones
//! 3. **Update** - Create, update and delete requests to match
//! 4. **Status** - Report per-bundle progress on the `ClusterDeployment`
//!
//! # Available Reconcilers
//!
//! - [`reconcile_cluster_deployment`] - Syncs `CertificateRequest` children and
//!   handles finalization
//!
//! # Example: Using the Reconciler
//!
//! ```rust,no_run
//! use certman::config::OperatorConfig;
//! use certman::context::Context;
//! use certman::reconcilers::reconcile_cluster_deployment;
//! use kube::Client;
//!
//! async fn reconcile_once(client: Client) -> certman::errors::Result<()> {
//!     let ctx = Context::from_client(client, OperatorConfig::from_env());
//!     let outcome = reconcile_cluster_deployment(&ctx, "uhc-foo", "foo").await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod clusterdeployment;
pub mod finalizers;

pub use clusterdeployment::{
    reconcile_cluster_deployment, IgnoreReason, ReconcileOutcome, SyncReport,
};

/// Check if a status value has actually changed compared to the current status.
///
/// Status updates raise watch events that trigger another reconciliation, so
/// callers patch status only when this returns `true`.
///
/// # Example
///
/// ```rust
/// use certman::reconcilers::status_changed;
///
/// assert!(!status_changed(&[1, 2][..], &[1, 2][..]));
/// assert!(status_changed(&[1, 2][..], &[2, 1][..]));
/// ```
#[must_use]
pub fn status_changed<T: PartialEq + ?Sized>(current_value: &T, new_value: &T) -> bool {
    current_value != new_value
}

#[cfg(test)]
mod mod_tests;
