// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `request.rs`

#[cfg(test)]
mod tests {
    use crate::crd::{
        AwsPlatform, AzurePlatform, ClusterDeployment, ClusterDeploymentSpec,
        ClusterDeploymentStatus, GcpPlatform, Platform, PlatformSecrets, SecretReference,
    };
    use crate::reconcilers::clusterdeployment::request::{
        build_certificate_request, bundle_status_name, certificate_request_name,
    };
    use kube::ResourceExt;

    fn secret(name: &str) -> SecretReference {
        SecretReference {
            name: name.to_string(),
        }
    }

    fn cluster(platform: Platform) -> ClusterDeployment {
        let mut cd = ClusterDeployment::new(
            "foo",
            ClusterDeploymentSpec {
                cluster_name: "foo".to_string(),
                base_domain: "example.com".to_string(),
                installed: true,
                platform,
                ..Default::default()
            },
        );
        cd.metadata.namespace = Some("uhc-foo".to_string());
        cd.status = Some(ClusterDeploymentStatus {
            api_url: "https://api.foo.example.com:6443".to_string(),
            web_console_url: "https://console.apps.foo.example.com".to_string(),
            certificate_bundles: vec![],
        });
        cd
    }

    #[test]
    fn test_request_name_is_deterministic_and_lowercase() {
        let first = certificate_request_name("foo", "Primary-Cert-Bundle");
        let second = certificate_request_name("foo", "Primary-Cert-Bundle");

        assert_eq!(first, "foo-primary-cert-bundle");
        assert_eq!(first, second);
    }

    #[test]
    fn test_bundle_status_name_strips_cluster_prefix() {
        assert_eq!(
            bundle_status_name("foo", "foo-primary-cert-bundle"),
            "primary-cert-bundle"
        );
        assert_eq!(bundle_status_name("foo", "unrelated"), "unrelated");
    }

    #[test]
    fn test_build_request_populates_spec_from_cluster() {
        // Arrange
        let cd = cluster(Platform::default());

        // Act
        let request = build_certificate_request(
            "primary-cert-bundle",
            "primary-cert-bundle-secret",
            vec!["api.foo.example.com".to_string()],
            &cd,
            "sre@example.com",
        );

        // Assert
        assert_eq!(request.name_any(), "foo-primary-cert-bundle");
        assert_eq!(request.namespace().as_deref(), Some("uhc-foo"));
        assert_eq!(request.spec.acme_dns_domain, "example.com");
        assert_eq!(request.spec.certificate_secret.kind, "secret");
        assert_eq!(request.spec.certificate_secret.namespace, "uhc-foo");
        assert_eq!(
            request.spec.certificate_secret.name,
            "primary-cert-bundle-secret"
        );
        assert_eq!(request.spec.dns_names, vec!["api.foo.example.com"]);
        assert_eq!(request.spec.email, "sre@example.com");
        assert_eq!(request.spec.api_url, "https://api.foo.example.com:6443");
        assert_eq!(
            request.spec.web_console_url,
            "https://console.apps.foo.example.com"
        );
        assert!(request.spec.platform.is_none());
        assert!(request.status.is_none());
        assert!(request.owner_references().is_empty());
    }

    #[test]
    fn test_build_request_without_cluster_status_leaves_urls_empty() {
        let mut cd = cluster(Platform::default());
        cd.status = None;

        let request = build_certificate_request("b", "s", vec!["x".to_string()], &cd, "e");

        assert!(request.spec.api_url.is_empty());
        assert!(request.spec.web_console_url.is_empty());
    }

    #[test]
    fn test_build_request_aws_platform() {
        let cd = cluster(Platform {
            aws: Some(AwsPlatform {
                credentials_secret_ref: secret("aws-creds"),
                region: "us-east-1".to_string(),
            }),
            ..Default::default()
        });

        let request = build_certificate_request("b", "s", vec!["x".to_string()], &cd, "e");

        match request.spec.platform {
            Some(PlatformSecrets::Aws(aws)) => {
                assert_eq!(aws.credentials.name, "aws-creds");
                assert_eq!(aws.region, "us-east-1");
            }
            other => panic!("expected AWS platform, got {other:?}"),
        }
    }

    #[test]
    fn test_build_request_gcp_platform() {
        let cd = cluster(Platform {
            gcp: Some(GcpPlatform {
                credentials_secret_ref: secret("gcp-creds"),
                region: "us-central1".to_string(),
            }),
            ..Default::default()
        });

        let request = build_certificate_request("b", "s", vec!["x".to_string()], &cd, "e");

        match request.spec.platform {
            Some(PlatformSecrets::Gcp(gcp)) => assert_eq!(gcp.credentials.name, "gcp-creds"),
            other => panic!("expected GCP platform, got {other:?}"),
        }
    }

    #[test]
    fn test_build_request_azure_platform() {
        let cd = cluster(Platform {
            azure: Some(AzurePlatform {
                credentials_secret_ref: secret("azure-creds"),
                region: "eastus".to_string(),
                base_domain_resource_group_name: "dns-rg".to_string(),
            }),
            ..Default::default()
        });

        let request = build_certificate_request("b", "s", vec!["x".to_string()], &cd, "e");

        match request.spec.platform {
            Some(PlatformSecrets::Azure(azure)) => {
                assert_eq!(azure.credentials.name, "azure-creds");
                assert_eq!(azure.resource_group_name, "dns-rg");
            }
            other => panic!("expected Azure platform, got {other:?}"),
        }
    }

    #[test]
    fn test_build_request_is_deterministic() {
        let cd = cluster(Platform::default());
        let build = || {
            build_certificate_request(
                "primary-cert-bundle",
                "secret",
                vec!["api.foo.example.com".to_string()],
                &cd,
                "sre@example.com",
            )
        };

        assert_eq!(build().spec, build().spec);
        assert_eq!(build().name_any(), build().name_any());
    }
}
