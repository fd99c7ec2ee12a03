// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `domains.rs`

#[cfg(test)]
mod tests {
    use crate::crd::{
        CertificateBundleSpec, ClusterDeploymentSpec, ClusterIngress,
        ControlPlaneAdditionalCertificate, ControlPlaneConfig, ControlPlaneServingCertificates,
    };
    use crate::reconcilers::clusterdeployment::domains::{domains_for_bundle, wildcard};

    const DEFAULT_BUNDLE: &str = "primary-cert-bundle";

    fn bundle(name: &str) -> CertificateBundleSpec {
        CertificateBundleSpec {
            name: name.to_string(),
            generate: true,
            ..Default::default()
        }
    }

    fn spec_with_default(default: &str) -> ClusterDeploymentSpec {
        ClusterDeploymentSpec {
            cluster_name: "foo".to_string(),
            base_domain: "example.com".to_string(),
            installed: true,
            control_plane_config: ControlPlaneConfig {
                serving_certificates: ControlPlaneServingCertificates {
                    default: default.to_string(),
                    additional: vec![],
                },
            },
            ..Default::default()
        }
    }

    fn ingress(domain: &str, bundle: &str) -> ClusterIngress {
        ClusterIngress {
            name: "default".to_string(),
            domain: domain.to_string(),
            serving_certificate: bundle.to_string(),
        }
    }

    #[test]
    fn test_default_bundle_gets_api_domain() {
        // Arrange
        let spec = spec_with_default(DEFAULT_BUNDLE);

        // Act
        let domains = domains_for_bundle(&bundle(DEFAULT_BUNDLE), &spec, None);

        // Assert
        assert_eq!(domains, vec!["api.foo.example.com"]);
    }

    #[test]
    fn test_default_bundle_with_extra_record() {
        // Arrange
        let spec = spec_with_default(DEFAULT_BUNDLE);

        // Act
        let domains = domains_for_bundle(&bundle(DEFAULT_BUNDLE), &spec, Some("rh-api"));

        // Assert
        assert_eq!(domains, vec!["api.foo.example.com", "rh-api.foo.example.com"]);
    }

    #[test]
    fn test_extra_record_ignored_for_non_default_bundle() {
        let spec = spec_with_default(DEFAULT_BUNDLE);

        let domains = domains_for_bundle(&bundle("other"), &spec, Some("rh-api"));

        assert!(domains.is_empty());
    }

    #[test]
    fn test_additional_control_plane_domains_are_verbatim() {
        // Arrange
        let mut spec = spec_with_default(DEFAULT_BUNDLE);
        spec.control_plane_config.serving_certificates.additional = vec![
            ControlPlaneAdditionalCertificate {
                name: "internal".to_string(),
                domain: "api.internal.example.com".to_string(),
            },
            ControlPlaneAdditionalCertificate {
                name: "someone-else".to_string(),
                domain: "api.other.example.com".to_string(),
            },
        ];

        // Act
        let domains = domains_for_bundle(&bundle("internal"), &spec, None);

        // Assert
        assert_eq!(domains, vec!["api.internal.example.com"]);
    }

    #[test]
    fn test_ingress_domain_is_rewritten_to_wildcard() {
        let mut spec = spec_with_default(DEFAULT_BUNDLE);
        spec.ingress = vec![ingress("apps.foo.example.com", "apps-bundle")];

        let domains = domains_for_bundle(&bundle("apps-bundle"), &spec, None);

        assert_eq!(domains, vec!["*.apps.foo.example.com"]);
    }

    #[test]
    fn test_ingress_domain_already_wildcard_is_unchanged() {
        let mut spec = spec_with_default(DEFAULT_BUNDLE);
        spec.ingress = vec![ingress("*.apps.foo.example.com", "apps-bundle")];

        let domains = domains_for_bundle(&bundle("apps-bundle"), &spec, None);

        assert_eq!(domains, vec!["*.apps.foo.example.com"]);
    }

    #[test]
    fn test_sources_are_appended_in_order_without_dedup() {
        // Arrange: One bundle referenced by every source, with a duplicate ingress
        let mut spec = spec_with_default(DEFAULT_BUNDLE);
        spec.control_plane_config.serving_certificates.additional =
            vec![ControlPlaneAdditionalCertificate {
                name: DEFAULT_BUNDLE.to_string(),
                domain: "api.internal.example.com".to_string(),
            }];
        spec.ingress = vec![
            ingress("apps.foo.example.com", DEFAULT_BUNDLE),
            ingress("apps.foo.example.com", DEFAULT_BUNDLE),
        ];

        // Act
        let domains = domains_for_bundle(&bundle(DEFAULT_BUNDLE), &spec, Some("rh-api"));

        // Assert
        assert_eq!(
            domains,
            vec![
                "api.foo.example.com",
                "rh-api.foo.example.com",
                "api.internal.example.com",
                "*.apps.foo.example.com",
                "*.apps.foo.example.com",
            ]
        );
    }

    #[test]
    fn test_unreferenced_bundle_resolves_nothing() {
        let spec = spec_with_default(DEFAULT_BUNDLE);

        assert!(domains_for_bundle(&bundle("orphan"), &spec, None).is_empty());
    }

    #[test]
    fn test_wildcard_helper() {
        assert_eq!(wildcard("apps.example.com"), "*.apps.example.com");
        assert_eq!(wildcard("*.apps.example.com"), "*.apps.example.com");
    }
}
