// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Construction of desired `CertificateRequest` objects.

use crate::constants::CERTIFICATE_SECRET_KIND;
use crate::crd::{
    AwsPlatformSecrets, AzurePlatformSecrets, CertificateRequest, CertificateRequestSpec,
    CertificateSecretReference, ClusterDeployment, GcpPlatformSecrets, PlatformCredentials,
    PlatformSecrets, SecretReference,
};
use kube::ResourceExt;

/// Name of the `CertificateRequest` for a bundle: lowercase `<cluster>-<bundle>`.
#[must_use]
pub fn certificate_request_name(cluster_name: &str, bundle_name: &str) -> String {
    format!("{cluster_name}-{bundle_name}").to_lowercase()
}

/// Recover the bundle status name from a request name.
///
/// Inverse of [`certificate_request_name`] for the cluster prefix; the bundle part
/// stays lowercase.
#[must_use]
pub fn bundle_status_name(cluster_name: &str, request_name: &str) -> String {
    let prefix = format!("{cluster_name}-");
    request_name
        .strip_prefix(&prefix)
        .unwrap_or(request_name)
        .to_string()
}

/// Translate the cluster's active platform into request-side credentials.
#[must_use]
pub fn platform_secrets(credentials: Option<PlatformCredentials<'_>>) -> Option<PlatformSecrets> {
    let secret = |name: &str| SecretReference {
        name: name.to_string(),
    };

    credentials.map(|c| match c {
        PlatformCredentials::Aws {
            secret_name,
            region,
        } => PlatformSecrets::Aws(AwsPlatformSecrets {
            credentials: secret(secret_name),
            region: region.to_string(),
        }),
        PlatformCredentials::Gcp { secret_name } => PlatformSecrets::Gcp(GcpPlatformSecrets {
            credentials: secret(secret_name),
        }),
        PlatformCredentials::Azure {
            secret_name,
            resource_group_name,
        } => PlatformSecrets::Azure(AzurePlatformSecrets {
            credentials: secret(secret_name),
            resource_group_name: resource_group_name.to_string(),
        }),
    })
}

/// Build the desired `CertificateRequest` for one certificate bundle.
///
/// The result is not persisted and carries no owner reference; the reconciler
/// attaches one when creating it.
///
/// # Arguments
///
/// * `bundle_name` - Certificate bundle name
/// * `secret_name` - Secret receiving the issued certificate
/// * `domains` - Resolved DNS names, non-empty
/// * `cd` - The owning `ClusterDeployment`
/// * `email` - Notification email address
#[must_use]
pub fn build_certificate_request(
    bundle_name: &str,
    secret_name: &str,
    domains: Vec<String>,
    cd: &ClusterDeployment,
    email: &str,
) -> CertificateRequest {
    let namespace = cd.namespace().unwrap_or_default();
    let name = certificate_request_name(&cd.name_any(), bundle_name);
    let (api_url, web_console_url) = cd
        .status
        .as_ref()
        .map(|s| (s.api_url.clone(), s.web_console_url.clone()))
        .unwrap_or_default();

    let spec = CertificateRequestSpec {
        acme_dns_domain: cd.spec.base_domain.clone(),
        certificate_secret: CertificateSecretReference {
            kind: CERTIFICATE_SECRET_KIND.to_string(),
            namespace: namespace.clone(),
            name: secret_name.to_string(),
        },
        dns_names: domains,
        email: email.to_string(),
        api_url,
        web_console_url,
        platform: platform_secrets(cd.spec.platform.credentials()),
    };

    let mut request = CertificateRequest::new(&name, spec);
    request.metadata.namespace = Some(namespace);
    request
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
