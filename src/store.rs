// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resource store boundary used by the reconciler.
//!
//! [`ClusterStore`] lists every read and write a reconciliation pass performs,
//! which keeps the pass testable without an API server. [`KubeStore`] is the
//! production implementation on top of `kube::Api`.

use crate::constants::FIELD_MANAGER;
use crate::crd::{CertificateBundleStatus, CertificateRequest, ClusterDeployment};
use crate::errors::{Error, Result};
use crate::reconcilers::finalizers;
use async_trait::async_trait;
use kube::api::{DeleteParams, ListParams, Patch, PatchParams, PostParams};
use kube::{Api, Client, ResourceExt};
use serde_json::json;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Store operations needed to reconcile a `ClusterDeployment`.
///
/// Every child operation is scoped to the namespace of the request or
/// cluster passed in.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterStore: Send + Sync {
    /// Fetch a `ClusterDeployment`, returning `None` if it no longer exists.
    async fn get_cluster_deployment(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<ClusterDeployment>>;

    /// Add `finalizer` to the cluster's finalizer list.
    async fn add_finalizer(&self, cd: &ClusterDeployment, finalizer: &str) -> Result<()>;

    /// Remove `finalizer` from the cluster's finalizer list.
    async fn remove_finalizer(&self, cd: &ClusterDeployment, finalizer: &str) -> Result<()>;

    /// Replace `status.certificateBundles` on the cluster.
    async fn patch_bundle_status(
        &self,
        cd: &ClusterDeployment,
        bundles: &[CertificateBundleStatus],
    ) -> Result<()>;

    /// List every `CertificateRequest` in a namespace.
    async fn list_certificate_requests(&self, namespace: &str) -> Result<Vec<CertificateRequest>>;

    /// Create a new `CertificateRequest`.
    async fn create_certificate_request(&self, request: &CertificateRequest) -> Result<()>;

    /// Replace an existing `CertificateRequest`, keeping its identity.
    async fn replace_certificate_request(&self, request: &CertificateRequest) -> Result<()>;

    /// Delete a `CertificateRequest`. Deleting an absent request succeeds.
    async fn delete_certificate_request(&self, request: &CertificateRequest) -> Result<()>;
}

/// [`ClusterStore`] backed by the Kubernetes API.
#[derive(Clone)]
pub struct KubeStore {
    client: Client,
}

impl KubeStore {
    /// Create a new `KubeStore` wrapping the given kube `Client`
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn request_api(&self, request: &CertificateRequest) -> Result<Api<CertificateRequest>> {
        let namespace = request.namespace().ok_or_else(|| Error::MissingNamespace {
            kind: crate::constants::KIND_CERTIFICATE_REQUEST.to_string(),
            name: request.name_any(),
        })?;
        Ok(Api::namespaced(self.client.clone(), &namespace))
    }
}

#[async_trait]
impl ClusterStore for KubeStore {
    async fn get_cluster_deployment(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<ClusterDeployment>> {
        let api: Api<ClusterDeployment> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.get_opt(name).await?)
    }

    async fn add_finalizer(&self, cd: &ClusterDeployment, finalizer: &str) -> Result<()> {
        finalizers::ensure_finalizer(&self.client, cd, finalizer).await
    }

    async fn remove_finalizer(&self, cd: &ClusterDeployment, finalizer: &str) -> Result<()> {
        finalizers::remove_finalizer(&self.client, cd, finalizer).await
    }

    async fn patch_bundle_status(
        &self,
        cd: &ClusterDeployment,
        bundles: &[CertificateBundleStatus],
    ) -> Result<()> {
        let namespace = cd.namespace().ok_or_else(|| Error::MissingNamespace {
            kind: crate::constants::KIND_CLUSTER_DEPLOYMENT.to_string(),
            name: cd.name_any(),
        })?;
        let api: Api<ClusterDeployment> = Api::namespaced(self.client.clone(), &namespace);

        let status_patch = json!({
            "status": { "certificateBundles": bundles }
        });
        let params = PatchParams {
            field_manager: Some(FIELD_MANAGER.to_string()),
            ..PatchParams::default()
        };
        api.patch_status(&cd.name_any(), &params, &Patch::Merge(&status_patch))
            .await?;

        debug!(
            "Patched certificate bundle status on {}/{}",
            namespace,
            cd.name_any()
        );
        Ok(())
    }

    async fn list_certificate_requests(&self, namespace: &str) -> Result<Vec<CertificateRequest>> {
        let api: Api<CertificateRequest> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    async fn create_certificate_request(&self, request: &CertificateRequest) -> Result<()> {
        self.request_api(request)?
            .create(&PostParams::default(), request)
            .await?;
        Ok(())
    }

    async fn replace_certificate_request(&self, request: &CertificateRequest) -> Result<()> {
        self.request_api(request)?
            .replace(&request.name_any(), &PostParams::default(), request)
            .await?;
        Ok(())
    }

    async fn delete_certificate_request(&self, request: &CertificateRequest) -> Result<()> {
        let api = self.request_api(request)?;
        match api.delete(&request.name_any(), &DeleteParams::default()).await {
            Ok(_) => Ok(()),
            Err(kube::Error::Api(ae)) if ae.code == 404 => {
                debug!(
                    "CertificateRequest {} already deleted",
                    request.name_any()
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
