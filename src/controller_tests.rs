// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `controller.rs`

#[cfg(test)]
mod tests {
    use crate::config::OperatorConfig;
    use crate::constants::ERROR_REQUEUE_DURATION_SECS;
    use crate::context::Context;
    use crate::controller::{error_policy, reconcile_wrapper, ReconcileError};
    use crate::crd::{ClusterDeployment, ClusterDeploymentSpec};
    use crate::errors::Error;
    use crate::notifications::MockNotificationEmailProvider;
    use crate::store::MockClusterStore;
    use kube::runtime::controller::Action;
    use std::sync::Arc;
    use std::time::Duration;

    fn cluster() -> Arc<ClusterDeployment> {
        let mut cd = ClusterDeployment::new("foo", ClusterDeploymentSpec::default());
        cd.metadata.namespace = Some("uhc-foo".to_string());
        Arc::new(cd)
    }

    fn context(store: MockClusterStore) -> Arc<Context> {
        Arc::new(Context::new(
            Arc::new(store),
            Arc::new(MockNotificationEmailProvider::new()),
            OperatorConfig::default(),
        ))
    }

    #[test]
    fn test_error_policy_requeues_after_fixed_delay() {
        let err = ReconcileError::from(Error::Store("boom".to_string()));

        let action = error_policy(cluster(), &err, context(MockClusterStore::new()));

        assert_eq!(
            action,
            Action::requeue(Duration::from_secs(ERROR_REQUEUE_DURATION_SECS))
        );
    }

    #[test]
    fn test_reconcile_error_is_transparent() {
        let err = ReconcileError::from(Error::Store("boom".to_string()));

        assert_eq!(err.to_string(), "resource store error: boom");
    }

    #[tokio::test]
    async fn test_wrapper_waits_for_change_on_success() {
        // Arrange: The cluster disappeared before the pass
        let mut store = MockClusterStore::new();
        store
            .expect_get_cluster_deployment()
            .times(1)
            .returning(|_, _| Ok(None));

        // Act
        let action = reconcile_wrapper(cluster(), context(store)).await.unwrap();

        // Assert
        assert_eq!(action, Action::await_change());
    }

    #[tokio::test]
    async fn test_wrapper_propagates_errors() {
        let mut store = MockClusterStore::new();
        store
            .expect_get_cluster_deployment()
            .times(1)
            .returning(|_, _| Err(Error::Store("unavailable".to_string())));

        let result = reconcile_wrapper(cluster(), context(store)).await;

        assert!(result.is_err());
    }
}
