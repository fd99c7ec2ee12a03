// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `ClusterDeployment` reconciliation logic.
//!
//! Each pass keeps the `CertificateRequest` children of one `ClusterDeployment`
//! in line with its certificate bundles. A pass runs these steps in order and
//! stops at the first one that decides the outcome:
//!
//! 1. Fetch the `ClusterDeployment` (gone means nothing to do)
//! 2. Record the support tier metric
//! 3. Skip unmanaged, fake, uninstalled and relocating clusters
//! 4. On deletion, delete every request in the namespace and drop the finalizer
//! 5. Add the finalizer
//! 6. Sync requests and patch the bundle status
//!
//! ## Module Structure
//!
//! - [`domains`] - DNS names per certificate bundle
//! - [`gates`] - Label and annotation checks
//! - [`plan`] - Desired vs stored request diff
//! - [`request`] - `CertificateRequest` construction
//! - [`status_helpers`] - Bundle status aggregation
//! - [`types`] - Outcome types and shared imports

pub mod domains;
pub mod gates;
pub mod plan;
pub mod request;
pub mod status_helpers;
pub mod types;

pub use types::{IgnoreReason, ReconcileOutcome, SyncReport};

#[allow(clippy::wildcard_imports)]
use types::*;

use crate::metrics;
use crate::reconcilers::finalizers::has_finalizer;
use domains::domains_for_bundle;
use plan::{plan_sync, PlannedAction};
use request::build_certificate_request;
use status_helpers::{bundle_status, bundle_status_changed};

/// Reconciles one `ClusterDeployment`.
///
/// # Arguments
///
/// * `ctx` - Store, notification provider and configuration
/// * `namespace` - Namespace of the `ClusterDeployment`
/// * `name` - Name of the `ClusterDeployment`
///
/// # Returns
///
/// What the pass did. A pass that returns `Ok` never needs a retry.
///
/// # Errors
///
/// Returns an error if a store call outside the per-bundle loop fails, if the
/// notification email cannot be read, or, as [`Error::SyncFailed`], if any
/// bundle could not be synced. Every error is safe to retry from scratch.
pub async fn reconcile_cluster_deployment(
    ctx: &Context,
    namespace: &str,
    name: &str,
) -> Result<ReconcileOutcome> {
    let store = ctx.store.as_ref();

    debug!(namespace = %namespace, name = %name, "Starting ClusterDeployment reconciliation");

    let Some(cd) = store.get_cluster_deployment(namespace, name).await? else {
        debug!("ClusterDeployment {}/{} not found, nothing to do", namespace, name);
        return Ok(ReconcileOutcome::NotFound);
    };

    let limited = gates::is_limited_support(&cd);
    if limited {
        info!("Cluster {}/{} is in limited support", namespace, name);
    } else {
        debug!("Cluster {}/{} is in full support", namespace, name);
    }
    metrics::record_cluster_support_tier(name, namespace, limited);

    if let Some(reason) = gates::ignore_reason(&cd) {
        info!("Not reconciling ClusterDeployment {}/{}: {}", namespace, name, reason);
        return Ok(ReconcileOutcome::Ignored(reason));
    }

    if cd.metadata.deletion_timestamp.is_some() {
        if !has_finalizer(&cd, FINALIZER_CERTIFICATE_REQUESTS) {
            debug!(
                "ClusterDeployment {}/{} is being deleted without our finalizer",
                namespace, name
            );
            return Ok(ReconcileOutcome::DeletionWithoutFinalizer);
        }

        info!(
            "Deleting CertificateRequests for ClusterDeployment {}/{}",
            namespace, name
        );
        let deleted = finalize(store, &cd, namespace).await?;
        return Ok(ReconcileOutcome::Finalized { deleted });
    }

    if !has_finalizer(&cd, FINALIZER_CERTIFICATE_REQUESTS) {
        info!("Adding finalizer to ClusterDeployment {}/{}", namespace, name);
        store
            .add_finalizer(&cd, FINALIZER_CERTIFICATE_REQUESTS)
            .await?;
    }

    let report = sync_certificate_requests(ctx, &cd, namespace).await?;
    info!(
        created = report.created,
        updated = report.updated,
        unchanged = report.unchanged,
        deleted = report.deleted,
        status_patched = report.status_patched,
        "Done syncing CertificateRequests for {}/{}",
        namespace,
        name
    );
    Ok(ReconcileOutcome::Synced(report))
}

/// Delete every `CertificateRequest` in the namespace, then remove the finalizer.
///
/// All deletes are attempted. The finalizer stays in place if any of them failed.
async fn finalize(
    store: &dyn ClusterStore,
    cd: &ClusterDeployment,
    namespace: &str,
) -> Result<usize> {
    let requests = store.list_certificate_requests(namespace).await?;
    let mut failures = Vec::new();
    let mut deleted = 0;

    for request in &requests {
        match store.delete_certificate_request(request).await {
            Ok(()) => {
                info!("Deleted CertificateRequest {}/{}", namespace, request.name_any());
                metrics::record_resource_deleted(KIND_CERTIFICATE_REQUEST);
                deleted += 1;
            }
            Err(e) => {
                error!(
                    "Failed to delete CertificateRequest {}/{}: {}",
                    namespace,
                    request.name_any(),
                    e
                );
                metrics::record_error(KIND_CERTIFICATE_REQUEST, e.category());
                failures.push(format!("delete {}: {e}", request.name_any()));
            }
        }
    }

    if !failures.is_empty() {
        return Err(Error::SyncFailed { failures });
    }

    info!(
        "Removing finalizer from ClusterDeployment {}/{}",
        namespace,
        cd.name_any()
    );
    store
        .remove_finalizer(cd, FINALIZER_CERTIFICATE_REQUESTS)
        .await?;

    Ok(deleted)
}

/// Bring the namespace's `CertificateRequest` objects in line with the bundles.
async fn sync_certificate_requests(
    ctx: &Context,
    cd: &ClusterDeployment,
    namespace: &str,
) -> Result<SyncReport> {
    let store = ctx.store.as_ref();
    let cluster_name = cd.name_any();
    let mut failures = Vec::new();

    for bundle in &cd.spec.certificate_bundles {
        debug!(
            bundle = %bundle.name,
            generate = bundle.generate,
            "Processing certificate bundle"
        );
    }

    let generating: Vec<&CertificateBundleSpec> = cd
        .spec
        .certificate_bundles
        .iter()
        .filter(|b| b.generate)
        .collect();

    let email = if generating.is_empty() {
        String::new()
    } else {
        ctx.notifications.default_notification_email().await?
    };

    let mut desired = Vec::with_capacity(generating.len());
    for bundle in generating {
        let domains = domains_for_bundle(bundle, &cd.spec, ctx.config.extra_record.as_deref());
        if domains.is_empty() {
            let err = Error::NoDomains {
                bundle: bundle.name.clone(),
                cluster: cluster_name.clone(),
            };
            warn!("{}", err);
            metrics::record_error(KIND_CLUSTER_DEPLOYMENT, err.category());
            failures.push(err.to_string());
            continue;
        }

        desired.push(build_certificate_request(
            &bundle.name,
            &bundle.certificate_secret_ref.name,
            domains,
            cd,
            &email,
        ));
    }

    let current = store.list_certificate_requests(namespace).await?;
    let plan = plan_sync(desired, current);

    let mut report = SyncReport::default();
    let mut bundles = Vec::with_capacity(plan.actions.len());

    for action in plan.actions {
        let request_name = action.name();
        match apply_action(store, cd, &action, &mut report).await {
            Ok(()) => bundles.push(bundle_status(&cluster_name, &action)),
            Err(e) => {
                error!(
                    "Failed to sync CertificateRequest {}/{}: {}",
                    namespace, request_name, e
                );
                metrics::record_error(KIND_CERTIFICATE_REQUEST, e.category());
                failures.push(format!("{request_name}: {e}"));
            }
        }
    }

    for request in &plan.delete {
        info!(
            "Deleting CertificateRequest {}/{} that is no longer needed",
            namespace,
            request.name_any()
        );
        match store.delete_certificate_request(request).await {
            Ok(()) => {
                metrics::record_resource_deleted(KIND_CERTIFICATE_REQUEST);
                report.deleted += 1;
            }
            Err(e) => {
                error!(
                    "Failed to delete CertificateRequest {}/{}: {}",
                    namespace,
                    request.name_any(),
                    e
                );
                metrics::record_error(KIND_CERTIFICATE_REQUEST, e.category());
                failures.push(format!("delete {}: {e}", request.name_any()));
            }
        }
    }

    if bundle_status_changed(cd, &bundles) {
        match store.patch_bundle_status(cd, &bundles).await {
            Ok(()) => report.status_patched = true,
            Err(e) => {
                error!(
                    "Failed to update certificate bundle status on {}/{}: {}",
                    namespace, cluster_name, e
                );
                metrics::record_error(KIND_CLUSTER_DEPLOYMENT, e.category());
                failures.push(format!("status: {e}"));
            }
        }
    }

    if failures.is_empty() {
        Ok(report)
    } else {
        Err(Error::SyncFailed { failures })
    }
}

/// Apply one planned action and count it in `report`.
async fn apply_action(
    store: &dyn ClusterStore,
    cd: &ClusterDeployment,
    action: &PlannedAction,
    report: &mut SyncReport,
) -> Result<()> {
    match action {
        PlannedAction::Create(desired) => {
            let owner = cd
                .controller_owner_ref(&())
                .ok_or_else(|| Error::OwnerReference {
                    request: desired.name_any(),
                    cluster: cd.name_any(),
                })?;
            let mut request = desired.clone();
            request.metadata.owner_references = Some(vec![owner]);

            info!("Creating CertificateRequest {}", request.name_any());
            store.create_certificate_request(&request).await?;
            metrics::record_resource_created(KIND_CERTIFICATE_REQUEST);
            report.created += 1;
        }
        PlannedAction::Update { current, desired } => {
            let mut request = current.clone();
            request.spec = desired.spec.clone();

            info!("Updating CertificateRequest {}", request.name_any());
            store.replace_certificate_request(&request).await?;
            metrics::record_resource_updated(KIND_CERTIFICATE_REQUEST);
            report.updated += 1;
        }
        PlannedAction::Unchanged { current } => {
            debug!("No update needed for CertificateRequest {}", current.name_any());
            report.unchanged += 1;
        }
    }
    Ok(())
}
