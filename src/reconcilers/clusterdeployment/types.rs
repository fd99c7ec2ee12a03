// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared types and imports for `ClusterDeployment` reconciliation.

#![allow(clippy::wildcard_imports)]

pub use crate::constants::{KIND_CERTIFICATE_REQUEST, KIND_CLUSTER_DEPLOYMENT};
pub use crate::context::Context;
pub use crate::crd::{
    CertificateBundleSpec, CertificateBundleStatus, CertificateRequest, ClusterDeployment,
};
pub use crate::errors::{Error, Result};
pub use crate::labels::FINALIZER_CERTIFICATE_REQUESTS;
pub use crate::store::ClusterStore;

pub use kube::{Resource, ResourceExt};
pub use std::fmt;
pub use tracing::{debug, error, info, warn};

/// Why a pass stopped before touching any `CertificateRequest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Managed label absent or not `"true"`
    Unmanaged,
    /// Fake-cluster annotation is `"true"`
    FakeCluster,
    /// Installation has not finished yet
    NotInstalled,
    /// The cluster is relocating to another shard
    Relocating,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Unmanaged => "not a managed cluster",
            Self::FakeCluster => "fake cluster",
            Self::NotInstalled => "cluster not yet installed",
            Self::Relocating => "cluster is relocating",
        };
        f.write_str(reason)
    }
}

/// Writes performed by a successful sync.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub deleted: usize,
    pub status_patched: bool,
}

impl SyncReport {
    /// True when the pass changed nothing in the store.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.deleted == 0 && !self.status_patched
    }
}

/// Result of one successful reconciliation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The `ClusterDeployment` no longer exists.
    NotFound,
    /// A gate stopped the pass.
    Ignored(IgnoreReason),
    /// Being deleted, and nothing is left to clean up.
    DeletionWithoutFinalizer,
    /// Owned requests were deleted and the finalizer removed.
    Finalized { deleted: usize },
    /// Requests were brought in line with the certificate bundles.
    Synced(SyncReport),
}
