// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Diff between desired and stored `CertificateRequest` sets.
//!
//! Requests are matched by name only; callers pass requests that already share the
//! parent's namespace. Spec equality is the structural `PartialEq` of
//! [`CertificateRequestSpec`](crate::crd::CertificateRequestSpec); status is never
//! compared.

use crate::crd::CertificateRequest;
use kube::ResourceExt;
use std::collections::{HashMap, HashSet};

/// What to do with one desired request.
#[derive(Clone, Debug)]
pub enum PlannedAction {
    /// No stored request has this name.
    Create(CertificateRequest),
    /// A stored request exists with a different spec.
    Update {
        current: CertificateRequest,
        desired: CertificateRequest,
    },
    /// A stored request exists with an identical spec.
    Unchanged { current: CertificateRequest },
}

impl PlannedAction {
    /// Name of the request this action applies to.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Create(desired) | Self::Update { desired, .. } => desired.name_any(),
            Self::Unchanged { current } => current.name_any(),
        }
    }
}

/// Result of [`plan_sync`].
#[derive(Clone, Debug, Default)]
pub struct SyncPlan {
    /// One action per desired request, in desired order.
    pub actions: Vec<PlannedAction>,
    /// Stored requests with no desired counterpart, in stored order.
    pub delete: Vec<CertificateRequest>,
}

impl SyncPlan {
    /// True when applying the plan would not write anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.delete.is_empty()
            && self
                .actions
                .iter()
                .all(|a| matches!(a, PlannedAction::Unchanged { .. }))
    }
}

/// Partition `desired` against `current`.
///
/// If `desired` repeats a name, only the first occurrence is planned.
#[must_use]
pub fn plan_sync(desired: Vec<CertificateRequest>, current: Vec<CertificateRequest>) -> SyncPlan {
    let desired_names: HashSet<String> = desired.iter().map(ResourceExt::name_any).collect();

    let (kept, delete): (Vec<_>, Vec<_>) = current
        .into_iter()
        .partition(|c| desired_names.contains(&c.name_any()));

    let mut stored: HashMap<String, CertificateRequest> =
        kept.into_iter().map(|c| (c.name_any(), c)).collect();
    let mut seen = HashSet::new();

    let actions = desired
        .into_iter()
        .filter(|d| seen.insert(d.name_any()))
        .map(|d| match stored.remove(&d.name_any()) {
            None => PlannedAction::Create(d),
            Some(current) if current.spec == d.spec => PlannedAction::Unchanged { current },
            Some(current) => PlannedAction::Update {
                current,
                desired: d,
            },
        })
        .collect();

    SyncPlan { actions, delete }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod plan_tests;
