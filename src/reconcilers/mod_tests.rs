// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for reconciler helper functions.

#[cfg(test)]
mod tests {
    use super::super::status_changed;
    use crate::crd::CertificateBundleStatus;

    fn entry(name: &str, generated: bool) -> CertificateBundleStatus {
        CertificateBundleStatus {
            name: name.to_string(),
            generated,
        }
    }

    #[test]
    fn test_status_changed_when_values_equal() {
        // Arrange
        let current = vec![entry("primary", true)];
        let new = vec![entry("primary", true)];

        // Act
        let result = status_changed(current.as_slice(), new.as_slice());

        // Assert: No update needed
        assert!(!result, "Should not report a change for equal status");
    }

    #[test]
    fn test_status_changed_when_flag_differs() {
        let current = vec![entry("primary", false)];
        let new = vec![entry("primary", true)];

        assert!(status_changed(current.as_slice(), new.as_slice()));
    }

    #[test]
    fn test_status_changed_from_empty() {
        let current: Vec<CertificateBundleStatus> = vec![];
        let new = vec![entry("primary", false)];

        assert!(status_changed(current.as_slice(), new.as_slice()));
        assert!(!status_changed(current.as_slice(), current.as_slice()));
    }

    #[test]
    fn test_status_changed_scalars() {
        assert!(!status_changed(&Some(3), &Some(3)));
        assert!(status_changed(&None, &Some(3)));
    }
}
