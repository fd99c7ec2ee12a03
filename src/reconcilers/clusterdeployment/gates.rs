// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Label and annotation checks deciding whether a `ClusterDeployment` is reconciled.

#[allow(clippy::wildcard_imports)]
use super::types::*;
use crate::labels::{
    FAKE_CLUSTER_ANNOTATION, LIMITED_SUPPORT_LABEL, MANAGED_LABEL, RELOCATE_ANNOTATION,
    RELOCATE_OUTGOING,
};
use std::collections::BTreeMap;

fn is_true(map: &BTreeMap<String, String>, key: &str) -> bool {
    map.get(key).is_some_and(|v| v == "true")
}

/// True when the cluster carries the managed label set to `"true"`.
#[must_use]
pub fn is_managed(cd: &ClusterDeployment) -> bool {
    is_true(cd.labels(), MANAGED_LABEL)
}

/// True when the cluster is in limited support.
#[must_use]
pub fn is_limited_support(cd: &ClusterDeployment) -> bool {
    is_true(cd.labels(), LIMITED_SUPPORT_LABEL)
}

/// True for simulated clusters.
#[must_use]
pub fn is_fake(cd: &ClusterDeployment) -> bool {
    is_true(cd.annotations(), FAKE_CLUSTER_ANNOTATION)
}

/// True when the relocation annotation reads `<target>/outgoing`.
///
/// Values without a second segment are not a relocation.
#[must_use]
pub fn is_relocating_out(cd: &ClusterDeployment) -> bool {
    cd.annotations()
        .get(RELOCATE_ANNOTATION)
        .and_then(|v| v.split('/').nth(1))
        .is_some_and(|direction| direction == RELOCATE_OUTGOING)
}

/// First gate that stops reconciliation of `cd`, checked in order:
/// managed, fake, installed, relocating.
#[must_use]
pub fn ignore_reason(cd: &ClusterDeployment) -> Option<IgnoreReason> {
    if !is_managed(cd) {
        Some(IgnoreReason::Unmanaged)
    } else if is_fake(cd) {
        Some(IgnoreReason::FakeCluster)
    } else if !cd.spec.installed {
        Some(IgnoreReason::NotInstalled)
    } else if is_relocating_out(cd) {
        Some(IgnoreReason::Relocating)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "gates_tests.rs"]
mod gates_tests;
