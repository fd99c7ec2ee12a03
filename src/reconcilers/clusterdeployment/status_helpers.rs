// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Certificate bundle status aggregation for `ClusterDeployment` resources.

#[allow(clippy::wildcard_imports)]
use super::types::*;
use super::plan::PlannedAction;
use super::request::bundle_status_name;
use crate::reconcilers::status_changed;

/// Status entry for the bundle behind an applied action.
///
/// Created and updated requests have not been issued yet. Unchanged requests
/// report the issuance flag of the stored request.
#[must_use]
pub fn bundle_status(cluster_name: &str, action: &PlannedAction) -> CertificateBundleStatus {
    let generated = match action {
        PlannedAction::Create(_) | PlannedAction::Update { .. } => false,
        PlannedAction::Unchanged { current } => current.is_issued(),
    };

    CertificateBundleStatus {
        name: bundle_status_name(cluster_name, &action.name()),
        generated,
    }
}

/// Bundle status currently stored on the cluster. Missing status reads as empty.
#[must_use]
pub fn current_bundle_status(cd: &ClusterDeployment) -> &[CertificateBundleStatus] {
    cd.status
        .as_ref()
        .map(|s| s.certificate_bundles.as_slice())
        .unwrap_or_default()
}

/// True when `bundles` differs from the stored status, order included.
#[must_use]
pub fn bundle_status_changed(cd: &ClusterDeployment, bundles: &[CertificateBundleStatus]) -> bool {
    status_changed(current_bundle_status(cd), bundles)
}

#[cfg(test)]
#[path = "status_helpers_tests.rs"]
mod status_helpers_tests;
