// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for certificate request reconciliation.
//!
//! Errors fall into four groups:
//! - Resource store failures (`Kube`, `Store`), which are retried by the controller
//! - Configuration failures (`NotificationEmail`), which abort a pass before any write
//! - Per-bundle problems (`NoDomains`, `OwnerReference`), which never stop other bundles
//! - `SyncFailed`, the aggregate reported when a pass finished with per-bundle failures

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while reconciling a `ClusterDeployment`.
#[derive(Error, Debug)]
pub enum Error {
    /// The Kubernetes API rejected or failed a call.
    #[error("kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// A resource store call failed for a reason other than an API error.
    #[error("resource store error: {0}")]
    Store(String),

    /// A namespaced resource arrived without a namespace.
    #[error("{kind} {name} has no namespace")]
    MissingNamespace {
        /// Resource kind
        kind: String,
        /// Resource name
        name: String,
    },

    /// The default notification email address could not be determined.
    ///
    /// No certificate request can be built without it.
    #[error("failed to read default notification email address: {0}")]
    NotificationEmail(String),

    /// A bundle marked for generation resolved to zero DNS names.
    #[error("no domains provided for certificate bundle {bundle} in the cluster deployment {cluster}")]
    NoDomains {
        /// Certificate bundle name
        bundle: String,
        /// `ClusterDeployment` name
        cluster: String,
    },

    /// An owner reference could not be derived for a child request.
    #[error("cannot set owner reference on CertificateRequest {request}: ClusterDeployment {cluster} has no uid")]
    OwnerReference {
        /// `CertificateRequest` name
        request: String,
        /// `ClusterDeployment` name
        cluster: String,
    },

    /// A sync pass completed but some operations failed.
    #[error("met {} error(s) while syncing CertificateRequests: {}", .failures.len(), .failures.join("; "))]
    SyncFailed {
        /// One message per failed operation
        failures: Vec<String>,
    },
}

impl Error {
    /// Short category label for metrics.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Error::Kube(_) | Error::Store(_) => "api_error",
            Error::MissingNamespace { .. } | Error::NoDomains { .. } => "validation_error",
            Error::NotificationEmail(_) => "configuration_error",
            Error::OwnerReference { .. } => "owner_reference_error",
            Error::SyncFailed { .. } => "sync_error",
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
