// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the certificate operator.
//!
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group of the `CertificateRequest` CRD
pub const API_GROUP: &str = "certman.managed.openshift.io";

/// API version of the `CertificateRequest` CRD
pub const API_VERSION: &str = "v1alpha1";

/// Kind name for `ClusterDeployment` resource
pub const KIND_CLUSTER_DEPLOYMENT: &str = "ClusterDeployment";

/// Kind name for `CertificateRequest` resource
pub const KIND_CERTIFICATE_REQUEST: &str = "CertificateRequest";

/// `kind` recorded in a certificate request's secret reference
pub const CERTIFICATE_SECRET_KIND: &str = "secret";

/// Field manager used for patches issued by this operator
pub const FIELD_MANAGER: &str = "certman-operator";

// ============================================================================
// Operator Configuration Constants
// ============================================================================

/// Default namespace the operator runs in
pub const DEFAULT_OPERATOR_NAMESPACE: &str = "certman-operator";

/// `ConfigMap` holding operator-wide settings
pub const OPERATOR_CONFIG_MAP: &str = "certman-operator";

/// `ConfigMap` key of the default notification email address
pub const DEFAULT_NOTIFICATION_EMAIL_KEY: &str = "default_notification_email_address";

/// Environment variable naming an extra control plane record label
pub const ENV_EXTRA_RECORD: &str = "EXTRA_RECORD";

/// Environment variable enabling the FedRAMP compliance mode
pub const ENV_FEDRAMP: &str = "FEDRAMP";

/// Environment variable carrying the hosted zone identifier
pub const ENV_HOSTED_ZONE_ID: &str = "HOSTED_ZONE_ID";

/// Environment variable carrying the operator namespace
pub const ENV_OPERATOR_NAMESPACE: &str = "OPERATOR_NAMESPACE";

// ============================================================================
// Controller Error Handling Constants
// ============================================================================

/// Requeue duration for controller errors (30 seconds)
pub const ERROR_REQUEUE_DURATION_SECS: u64 = 30;

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 4;

// ============================================================================
// Metrics Server Constants
// ============================================================================

/// Port for Prometheus metrics HTTP server
pub const METRICS_SERVER_PORT: u16 = 8080;

/// Path for Prometheus metrics endpoint
pub const METRICS_SERVER_PATH: &str = "/metrics";

/// Bind address for metrics HTTP server
pub const METRICS_SERVER_BIND_ADDRESS: &str = "0.0.0.0";
