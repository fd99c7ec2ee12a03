// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Label, annotation and finalizer names read or written by the operator.

// ============================================================================
// ClusterDeployment Labels
// ============================================================================

/// Label marking a cluster as managed; only `"true"` opts a cluster in
pub const MANAGED_LABEL: &str = "api.openshift.com/managed";

/// Label marking a cluster as being in limited support
pub const LIMITED_SUPPORT_LABEL: &str = "api.openshift.com/limited-support";

// ============================================================================
// ClusterDeployment Annotations
// ============================================================================

/// Annotation marking a simulated cluster that must never get real certificates
pub const FAKE_CLUSTER_ANNOTATION: &str = "managed.openshift.com/fake";

/// Annotation set while a cluster is moved between provisioning shards.
///
/// Value format is `<target>/<direction>`.
pub const RELOCATE_ANNOTATION: &str = "hive.openshift.io/relocate";

/// Relocation direction of a cluster leaving this shard
pub const RELOCATE_OUTGOING: &str = "outgoing";

// ============================================================================
// Finalizers
// ============================================================================

/// Finalizer guarding `CertificateRequest` cleanup on a `ClusterDeployment`
pub const FINALIZER_CERTIFICATE_REQUESTS: &str = "certificaterequests.certman.managed.openshift.io";
