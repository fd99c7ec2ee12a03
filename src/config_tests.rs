// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `config.rs`

#[cfg(test)]
mod tests {
    use crate::config::OperatorConfig;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_yields_defaults() {
        let config = OperatorConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config, OperatorConfig::default());
        assert_eq!(config.operator_namespace, "certman-operator");
    }

    #[test]
    fn test_all_variables_are_read() {
        // Arrange
        let lookup = lookup_from(&[
            ("EXTRA_RECORD", "rh-api"),
            ("FEDRAMP", "true"),
            ("HOSTED_ZONE_ID", "Z123456"),
            ("OPERATOR_NAMESPACE", "openshift-certman"),
        ]);

        // Act
        let config = OperatorConfig::from_lookup(lookup);

        // Assert
        assert_eq!(config.extra_record.as_deref(), Some("rh-api"));
        assert!(config.fedramp);
        assert_eq!(config.hosted_zone_id.as_deref(), Some("Z123456"));
        assert_eq!(config.operator_namespace, "openshift-certman");
    }

    #[test]
    fn test_blank_extra_record_is_unset() {
        let config = OperatorConfig::from_lookup(lookup_from(&[("EXTRA_RECORD", "  ")]));

        assert!(config.extra_record.is_none());
    }

    #[test]
    fn test_fedramp_requires_true() {
        let config = OperatorConfig::from_lookup(lookup_from(&[("FEDRAMP", "yes")]));
        assert!(!config.fedramp);

        let config = OperatorConfig::from_lookup(lookup_from(&[("FEDRAMP", "TRUE")]));
        assert!(config.fedramp);
    }
}
