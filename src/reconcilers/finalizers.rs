// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Finalizer management for namespaced Kubernetes resources.
//!
//! Finalizers are written with a JSON merge patch of `metadata.finalizers`
//! computed from the object as last read.
//!
//! # Example
//!
//! ```rust,no_run
//! use certman::crd::ClusterDeployment;
//! use certman::labels::FINALIZER_CERTIFICATE_REQUESTS;
//! use certman::reconcilers::finalizers::{ensure_finalizer, has_finalizer};
//! use kube::Client;
//!
//! async fn example(client: Client, cd: ClusterDeployment) -> certman::errors::Result<()> {
//!     if !has_finalizer(&cd, FINALIZER_CERTIFICATE_REQUESTS) {
//!         ensure_finalizer(&client, &cd, FINALIZER_CERTIFICATE_REQUESTS).await?;
//!     }
//!     Ok(())
//! }
//! ```

use crate::constants::FIELD_MANAGER;
use crate::errors::{Error, Result};
use kube::api::{Patch, PatchParams};
use kube::core::NamespaceResourceScope;
use kube::{Api, Client, Resource, ResourceExt};
use serde_json::json;
use tracing::info;

/// Check whether `finalizer` is present on `resource`.
#[must_use]
pub fn has_finalizer<T: ResourceExt>(resource: &T, finalizer: &str) -> bool {
    resource.finalizers().iter().any(|f| f == finalizer)
}

/// Return the finalizer list of `resource` with `finalizer` appended, unless already present.
#[must_use]
pub fn finalizers_with<T: ResourceExt>(resource: &T, finalizer: &str) -> Vec<String> {
    let mut finalizers = resource.finalizers().to_vec();
    if !finalizers.iter().any(|f| f == finalizer) {
        finalizers.push(finalizer.to_string());
    }
    finalizers
}

/// Return the finalizer list of `resource` with every occurrence of `finalizer` removed.
#[must_use]
pub fn finalizers_without<T: ResourceExt>(resource: &T, finalizer: &str) -> Vec<String> {
    resource
        .finalizers()
        .iter()
        .filter(|f| *f != finalizer)
        .cloned()
        .collect()
}

/// Add a finalizer to a resource if not already present.
///
/// The operation is idempotent - calling it multiple times has no effect if
/// the finalizer is already present.
///
/// # Errors
///
/// Returns an error if:
/// - The resource has no namespace
/// - The API patch operation fails
pub async fn ensure_finalizer<T>(client: &Client, resource: &T, finalizer: &str) -> Result<()>
where
    T: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + ResourceExt
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    if has_finalizer(resource, finalizer) {
        return Ok(());
    }

    let name = resource.name_any();
    let namespace = namespace_of(resource)?;

    info!(
        "Adding finalizer {} to {}/{} {}",
        finalizer,
        namespace,
        name,
        T::kind(&())
    );

    let finalizers = finalizers_with(resource, finalizer);
    patch_finalizers::<T>(client, &namespace, &name, finalizers).await
}

/// Remove a finalizer from a resource.
///
/// The operation is idempotent - calling it multiple times has no effect if
/// the finalizer is already absent.
///
/// # Errors
///
/// Returns an error if:
/// - The resource has no namespace
/// - The API patch operation fails
pub async fn remove_finalizer<T>(client: &Client, resource: &T, finalizer: &str) -> Result<()>
where
    T: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + ResourceExt
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    if !has_finalizer(resource, finalizer) {
        return Ok(());
    }

    let name = resource.name_any();
    let namespace = namespace_of(resource)?;

    info!(
        "Removing finalizer {} from {}/{} {}",
        finalizer,
        namespace,
        name,
        T::kind(&())
    );

    let finalizers = finalizers_without(resource, finalizer);
    patch_finalizers::<T>(client, &namespace, &name, finalizers).await
}

async fn patch_finalizers<T>(
    client: &Client,
    namespace: &str,
    name: &str,
    finalizers: Vec<String>,
) -> Result<()>
where
    T: Resource<DynamicType = (), Scope = NamespaceResourceScope>
        + Clone
        + std::fmt::Debug
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>,
{
    let api: Api<T> = Api::namespaced(client.clone(), namespace);
    let patch = json!({ "metadata": { "finalizers": finalizers } });
    let params = PatchParams {
        field_manager: Some(FIELD_MANAGER.to_string()),
        ..PatchParams::default()
    };
    api.patch(name, &params, &Patch::Merge(&patch)).await?;

    info!(
        "Successfully patched finalizers on {}/{} {}",
        namespace,
        name,
        T::kind(&())
    );
    Ok(())
}

fn namespace_of<T>(resource: &T) -> Result<String>
where
    T: Resource<DynamicType = ()> + ResourceExt,
{
    resource.namespace().ok_or_else(|| Error::MissingNamespace {
        kind: T::kind(&()).to_string(),
        name: resource.name_any(),
    })
}

#[cfg(test)]
#[path = "finalizers_tests.rs"]
mod finalizers_tests;
