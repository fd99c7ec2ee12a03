// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! DNS name resolution for certificate bundles.
//!
//! A bundle's DNS names come from three places, appended in this order:
//!
//! 1. The default API endpoint, when the bundle is the control plane's default
//!    serving certificate (`api.<cluster>.<base domain>`, plus
//!    `<extra record>.<cluster>.<base domain>` when an extra record is configured)
//! 2. Every additional control plane certificate naming the bundle, verbatim
//! 3. Every ingress naming the bundle, as a wildcard (`*.<domain>`)
//!
//! The result is not deduplicated.

use crate::crd::{CertificateBundleSpec, ClusterDeploymentSpec};
use tracing::debug;

/// Resolve the DNS names a certificate bundle must cover.
///
/// # Arguments
///
/// * `bundle` - The certificate bundle being resolved
/// * `spec` - Spec of the owning `ClusterDeployment`
/// * `extra_record` - Optional extra control plane record label
///
/// # Returns
///
/// The DNS names in discovery order. An empty list means nothing in the cluster
/// references the bundle; callers must treat that as an error for the bundle.
#[must_use]
pub fn domains_for_bundle(
    bundle: &CertificateBundleSpec,
    spec: &ClusterDeploymentSpec,
    extra_record: Option<&str>,
) -> Vec<String> {
    let mut domains = Vec::new();
    let serving = &spec.control_plane_config.serving_certificates;

    if serving.default == bundle.name {
        let api_domain = format!("api.{}.{}", spec.cluster_name, spec.base_domain);
        debug!(bundle = %bundle.name, "control plane config DNS name: {}", api_domain);
        domains.push(api_domain);

        if let Some(label) = extra_record {
            let extra_domain = format!("{}.{}.{}", label, spec.cluster_name, spec.base_domain);
            debug!(bundle = %bundle.name, "extra control plane DNS name: {}", extra_domain);
            domains.push(extra_domain);
        }
    }

    for additional in serving.additional.iter().filter(|a| a.name == bundle.name) {
        debug!(bundle = %bundle.name, "additional domain added to certificate request: {}", additional.domain);
        domains.push(additional.domain.clone());
    }

    for ingress in spec
        .ingress
        .iter()
        .filter(|i| i.serving_certificate == bundle.name)
    {
        let ingress_domain = wildcard(&ingress.domain);
        debug!(bundle = %bundle.name, "ingress domain added to certificate request: {}", ingress_domain);
        domains.push(ingress_domain);
    }

    domains
}

/// Rewrite `domain` to its wildcard form unless it already is one.
#[must_use]
pub fn wildcard(domain: &str) -> String {
    if domain.starts_with("*.") {
        domain.to_string()
    } else {
        format!("*.{domain}")
    }
}

#[cfg(test)]
#[path = "domains_tests.rs"]
mod domains_tests;
