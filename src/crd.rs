// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definitions used by the certificate operator.
//!
//! # Resource Types
//!
//! ## Consumed
//!
//! - [`ClusterDeployment`] - A managed cluster record owned by the provisioning system.
//!   Only the fields this operator reads are modelled; everything else is ignored
//!   on deserialization.
//!
//! ## Owned
//!
//! - [`CertificateRequest`] - One issuance request per certificate bundle with
//!   `generate: true`. The issuance workflow watches these and reports back through
//!   [`CertificateRequestStatus::issued`].
//!
//! # Example: Building a Certificate Request Spec
//!
//! ```rust,no_run
//! use certman::crd::{CertificateRequestSpec, CertificateSecretReference};
//!
//! let spec = CertificateRequestSpec {
//!     acme_dns_domain: "example.com".to_string(),
//!     certificate_secret: CertificateSecretReference {
//!         kind: "secret".to_string(),
//!         namespace: "uhc-production-1234".to_string(),
//!         name: "primary-cert-bundle-secret".to_string(),
//!     },
//!     dns_names: vec!["api.foo.example.com".to_string()],
//!     email: "sre@example.com".to_string(),
//!     api_url: "https://api.foo.example.com:6443".to_string(),
//!     web_console_url: "https://console-openshift-console.apps.foo.example.com".to_string(),
//!     platform: None,
//! };
//! ```

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// ClusterDeployment (hive.openshift.io/v1)
// ============================================================================

/// Reference to a secret in the same namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SecretReference {
    /// Name of the referenced secret.
    #[serde(default)]
    pub name: String,
}

/// Serving certificate assignments for the cluster control plane.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneServingCertificates {
    /// Name of the certificate bundle serving the default API endpoint.
    #[serde(default)]
    pub default: String,

    /// Extra API endpoint names, each served by a named certificate bundle.
    #[serde(default)]
    pub additional: Vec<ControlPlaneAdditionalCertificate>,
}

/// An additional control plane domain bound to a certificate bundle.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneAdditionalCertificate {
    /// Certificate bundle name.
    pub name: String,

    /// Fully qualified domain served by the bundle.
    pub domain: String,
}

/// Control plane configuration of a cluster.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneConfig {
    #[serde(default)]
    pub serving_certificates: ControlPlaneServingCertificates,
}

/// An ingress controller endpoint of the cluster.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterIngress {
    /// Ingress controller name (e.g. `default`).
    #[serde(default)]
    pub name: String,

    /// Base domain of the routes served by this ingress controller.
    pub domain: String,

    /// Name of the certificate bundle serving this ingress.
    #[serde(default)]
    pub serving_certificate: String,
}

/// AWS platform settings of a cluster.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatform {
    pub credentials_secret_ref: SecretReference,
    #[serde(default)]
    pub region: String,
}

/// GCP platform settings of a cluster.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GcpPlatform {
    pub credentials_secret_ref: SecretReference,
    #[serde(default)]
    pub region: String,
}

/// Azure platform settings of a cluster.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzurePlatform {
    pub credentials_secret_ref: SecretReference,
    #[serde(default)]
    pub region: String,

    /// Resource group holding the cluster's base domain DNS zone.
    #[serde(default)]
    pub base_domain_resource_group_name: String,
}

/// Platform block of a `ClusterDeployment`.
///
/// On the wire each supported cloud is an independent optional field, and other
/// platforms (bare metal, vSphere, ...) may be present that this operator does not
/// model. Use [`Platform::credentials`] to obtain the single active credential shape.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Platform {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzurePlatform>,
}

/// The credential shape of the cluster's active cloud platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformCredentials<'a> {
    Aws {
        secret_name: &'a str,
        region: &'a str,
    },
    Gcp {
        secret_name: &'a str,
    },
    Azure {
        secret_name: &'a str,
        resource_group_name: &'a str,
    },
}

impl Platform {
    /// Return the active platform credentials, if the cluster runs on a supported cloud.
    ///
    /// A well-formed cluster populates at most one block. When several are present
    /// Azure wins over AWS, and AWS wins over GCP.
    #[must_use]
    pub fn credentials(&self) -> Option<PlatformCredentials<'_>> {
        if let Some(azure) = &self.azure {
            return Some(PlatformCredentials::Azure {
                secret_name: &azure.credentials_secret_ref.name,
                resource_group_name: &azure.base_domain_resource_group_name,
            });
        }
        if let Some(aws) = &self.aws {
            return Some(PlatformCredentials::Aws {
                secret_name: &aws.credentials_secret_ref.name,
                region: &aws.region,
            });
        }
        self.gcp.as_ref().map(|gcp| PlatformCredentials::Gcp {
            secret_name: &gcp.credentials_secret_ref.name,
        })
    }
}

/// A named certificate the cluster wants issued.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateBundleSpec {
    /// Bundle name, referenced by control plane and ingress configuration.
    pub name: String,

    /// Whether this operator should request the certificate.
    #[serde(default)]
    pub generate: bool,

    /// Secret that receives the issued certificate.
    #[serde(default)]
    pub certificate_secret_ref: SecretReference,
}

/// Issuance state of one certificate bundle, as reported by this operator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateBundleStatus {
    pub name: String,
    #[serde(default)]
    pub generated: bool,
}

/// Observed state of a `ClusterDeployment`.
///
/// The provisioning system owns everything except `certificate_bundles`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDeploymentStatus {
    #[serde(default, rename = "apiURL")]
    pub api_url: String,

    #[serde(default, rename = "webConsoleURL")]
    pub web_console_url: String,

    #[serde(default)]
    pub certificate_bundles: Vec<CertificateBundleStatus>,
}

/// `ClusterDeployment` describes a managed cluster and the certificates it needs.
///
/// This operator never writes the spec. It adds and removes its finalizer and
/// maintains `status.certificateBundles`.
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "hive.openshift.io",
    version = "v1",
    kind = "ClusterDeployment",
    namespaced,
    doc = "ClusterDeployment is the provisioning record of a managed cluster."
)]
#[kube(status = "ClusterDeploymentStatus")]
#[serde(rename_all = "camelCase")]
pub struct ClusterDeploymentSpec {
    /// Short cluster name, used as the first label under the base domain.
    pub cluster_name: String,

    /// Base DNS domain of the cluster.
    pub base_domain: String,

    /// True once installation has completed.
    #[serde(default)]
    pub installed: bool,

    #[serde(default)]
    pub control_plane_config: ControlPlaneConfig,

    #[serde(default)]
    pub ingress: Vec<ClusterIngress>,

    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub certificate_bundles: Vec<CertificateBundleSpec>,
}

// ============================================================================
// CertificateRequest (certman.managed.openshift.io/v1alpha1)
// ============================================================================

/// Reference to the secret the issued certificate is written to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CertificateSecretReference {
    pub kind: String,
    pub namespace: String,
    pub name: String,
}

/// Cloud credentials used by the issuance workflow to answer DNS challenges on AWS.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatformSecrets {
    pub credentials: SecretReference,
    pub region: String,
}

/// Cloud credentials used by the issuance workflow to answer DNS challenges on GCP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GcpPlatformSecrets {
    pub credentials: SecretReference,
}

/// Cloud credentials used by the issuance workflow to answer DNS challenges on Azure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzurePlatformSecrets {
    pub credentials: SecretReference,
    pub resource_group_name: String,
}

/// Platform credentials carried by a certificate request.
///
/// Serialized externally tagged (`{"aws": {...}}`), which keeps exactly one
/// platform populated per request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlatformSecrets {
    Aws(AwsPlatformSecrets),
    Gcp(GcpPlatformSecrets),
    Azure(AzurePlatformSecrets),
}

/// Observed state of a certificate request, written by the issuance workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestStatus {
    /// True once a certificate has been issued into the target secret.
    #[serde(default)]
    pub issued: bool,

    /// Human-readable issuance progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Expiry of the issued certificate (RFC3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<String>,
}

/// `CertificateRequest` asks the issuance workflow for one certificate.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "certman.managed.openshift.io",
    version = "v1alpha1",
    kind = "CertificateRequest",
    namespaced,
    shortname = "certreq",
    doc = "CertificateRequest asks the issuance workflow for a certificate covering a list of DNS names and stores it in a secret."
)]
#[kube(status = "CertificateRequestStatus")]
#[kube(printcolumn = r#"{"name":"Issued","type":"boolean","jsonPath":".status.issued"}"#)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestSpec {
    /// Base domain whose DNS zone answers the ACME challenges.
    #[serde(rename = "acmeDNSDomain")]
    pub acme_dns_domain: String,

    /// Secret receiving the issued certificate.
    pub certificate_secret: CertificateSecretReference,

    /// DNS names covered by the certificate, in resolution order.
    pub dns_names: Vec<String>,

    /// Notification address registered with the certificate authority.
    pub email: String,

    #[serde(default, rename = "apiURL")]
    pub api_url: String,

    #[serde(default, rename = "webConsoleURL")]
    pub web_console_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformSecrets>,
}

impl CertificateRequest {
    /// True when the issuance workflow reports the certificate as issued.
    #[must_use]
    pub fn is_issued(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.issued)
    }
}

#[cfg(test)]
#[path = "crd_tests.rs"]
mod crd_tests;
