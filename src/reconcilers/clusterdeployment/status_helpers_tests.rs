// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `status_helpers.rs`

#[cfg(test)]
mod tests {
    use crate::crd::{
        CertificateBundleStatus, CertificateRequest, CertificateRequestSpec,
        CertificateRequestStatus, ClusterDeployment, ClusterDeploymentSpec,
        ClusterDeploymentStatus,
    };
    use crate::reconcilers::clusterdeployment::plan::PlannedAction;
    use crate::reconcilers::clusterdeployment::status_helpers::{
        bundle_status, bundle_status_changed, current_bundle_status,
    };

    fn request(issued: Option<bool>) -> CertificateRequest {
        let mut req = CertificateRequest::new("foo-primary-cert-bundle", CertificateRequestSpec::default());
        req.status = issued.map(|issued| CertificateRequestStatus {
            issued,
            ..Default::default()
        });
        req
    }

    fn entry(name: &str, generated: bool) -> CertificateBundleStatus {
        CertificateBundleStatus {
            name: name.to_string(),
            generated,
        }
    }

    fn cluster(bundles: Option<Vec<CertificateBundleStatus>>) -> ClusterDeployment {
        let mut cd = ClusterDeployment::new("foo", ClusterDeploymentSpec::default());
        cd.status = bundles.map(|certificate_bundles| ClusterDeploymentStatus {
            certificate_bundles,
            ..Default::default()
        });
        cd
    }

    #[test]
    fn test_created_and_updated_are_not_generated() {
        let created = bundle_status("foo", &PlannedAction::Create(request(None)));
        let updated = bundle_status(
            "foo",
            &PlannedAction::Update {
                current: request(Some(true)),
                desired: request(None),
            },
        );

        assert_eq!(created, entry("primary-cert-bundle", false));
        assert_eq!(updated, entry("primary-cert-bundle", false));
    }

    #[test]
    fn test_unchanged_reports_stored_issued_flag() {
        let issued = bundle_status(
            "foo",
            &PlannedAction::Unchanged {
                current: request(Some(true)),
            },
        );
        let pending = bundle_status(
            "foo",
            &PlannedAction::Unchanged {
                current: request(None),
            },
        );

        assert!(issued.generated);
        assert!(!pending.generated);
    }

    #[test]
    fn test_missing_status_reads_as_empty() {
        let cd = cluster(None);

        assert!(current_bundle_status(&cd).is_empty());
        assert!(!bundle_status_changed(&cd, &[]));
        assert!(bundle_status_changed(&cd, &[entry("a", false)]));
    }

    #[test]
    fn test_status_change_detection() {
        // Arrange
        let cd = cluster(Some(vec![entry("a", false), entry("b", true)]));

        // Act & Assert
        assert!(!bundle_status_changed(&cd, &[entry("a", false), entry("b", true)]));
        assert!(bundle_status_changed(&cd, &[entry("a", true), entry("b", true)]));
        assert!(bundle_status_changed(&cd, &[entry("b", true), entry("a", false)]));
        assert!(bundle_status_changed(&cd, &[entry("a", false)]));
    }
}
