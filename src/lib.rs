// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#![allow(unexpected_cfgs)]

//! # Certman - Certificate Request Operator for Kubernetes
//!
//! Certman watches `ClusterDeployment` resources of managed clusters and keeps one
//! `CertificateRequest` per certificate bundle in the cluster's namespace. The
//! requests are picked up by an issuance workflow that talks to the certificate
//! authority; this crate only reconciles them.
//!
//! ## Modules
//!
//! - [`crd`] - `ClusterDeployment` (consumed) and `CertificateRequest` (owned) types
//! - [`reconcilers`] - Reconciliation logic and finalizer helpers
//! - [`controller`] - Controller wiring and error policy
//! - [`context`] - Shared context handed to every reconciliation
//! - [`store`] - Resource store boundary over the Kubernetes API
//! - [`notifications`] - Default notification email lookup
//! - [`config`] - Environment configuration
//! - [`metrics`] - Prometheus metrics
//!
//! ## Example
//!
//! ```rust
//! use certman::reconcilers::clusterdeployment::domains::wildcard;
//! use certman::reconcilers::clusterdeployment::request::certificate_request_name;
//!
//! assert_eq!(certificate_request_name("foo", "Primary-Cert-Bundle"), "foo-primary-cert-bundle");
//! assert_eq!(wildcard("apps.foo.example.com"), "*.apps.foo.example.com");
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod controller;
pub mod crd;
pub mod errors;
pub mod labels;
pub mod metrics;
pub mod notifications;
pub mod reconcilers;
pub mod store;
