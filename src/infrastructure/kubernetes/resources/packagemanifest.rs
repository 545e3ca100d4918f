// Copyright 2025 KubeInfra Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::kubernetes::client::ResourceApi;
use crate::infrastructure::kubernetes::resources::builder::{list_resources, ResourceBuilder};
use crate::shared::error::{KubeError, Result};
use kube::api::ListParams;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Catalog entry describing an installable operator package.
///
/// Package manifests are served by the package server rather than stored in
/// etcd; builders around them are typically pulled or listed, not created.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "packages.operators.coreos.com",
    version = "v1",
    kind = "PackageManifest",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifestSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_source_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_channel: Option<String>,
}

pub type PackageManifestBuilder = ResourceBuilder<PackageManifest>;

impl PackageManifestBuilder {
    /// Loads an existing PackageManifest into a builder.
    pub async fn pull(
        api_client: Arc<dyn ResourceApi<PackageManifest>>,
        name: &str,
        nsname: &str,
    ) -> Result<Self> {
        debug!("Pulling existing PackageManifest name: {}", name);

        let mut definition = PackageManifest::new(name, PackageManifestSpec::default());
        definition.metadata.namespace = Some(nsname.to_string());

        let mut builder = ResourceBuilder::from_definition(api_client, definition);

        if name.is_empty() {
            builder.defer_error("packageManifest 'name' cannot be empty");
        }

        if nsname.is_empty() {
            builder.defer_error("packageManifest 'nsname' cannot be empty");
        }

        builder.pull_existing().await
    }
}

/// Returns the PackageManifest inventory in the given namespace.
pub async fn list(
    api_client: Arc<dyn ResourceApi<PackageManifest>>,
    nsname: &str,
    options: &[ListParams],
) -> Result<Vec<PackageManifestBuilder>> {
    if nsname.is_empty() {
        debug!("packagemanifest 'nsname' parameter can not be empty");

        return Err(KubeError::Validation(
            "failed to list packagemanifests, 'nsname' parameter is empty".to_string(),
        ));
    }

    list_resources(api_client, Some(nsname), options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::fake::FakeResourceApi;

    fn generate_packagemanifest(name: &str, namespace: &str) -> PackageManifest {
        let mut manifest = PackageManifest::new(
            name,
            PackageManifestSpec {
                catalog_source: Some("community-operators".to_string()),
                ..Default::default()
            },
        );
        manifest.metadata.namespace = Some(namespace.to_string());

        manifest
    }

    #[tokio::test]
    async fn test_packagemanifest_pull() {
        let api = FakeResourceApi::new([generate_packagemanifest("test", "test")]);

        let builder = PackageManifestBuilder::pull(api.clone(), "test", "test")
            .await
            .unwrap();
        assert_eq!(
            builder.definition.spec.catalog_source.as_deref(),
            Some("community-operators")
        );

        let err = PackageManifestBuilder::pull(api, "missing", "test")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "PackageManifest object missing does not exist"
        );
    }

    #[tokio::test]
    async fn test_packagemanifest_list() {
        let api = FakeResourceApi::new([
            generate_packagemanifest("first", "test"),
            generate_packagemanifest("second", "test"),
        ]);

        let builders = list(api, "test", &[]).await.unwrap();
        assert_eq!(builders.len(), 2);
    }

    // An empty result set stays an empty, non-error collection for this kind.
    #[tokio::test]
    async fn test_packagemanifest_list_empty_is_ok() {
        let api = FakeResourceApi::<PackageManifest>::empty();

        let builders = list(api, "test", &[]).await.unwrap();
        assert!(builders.is_empty());
    }

    #[tokio::test]
    async fn test_packagemanifest_list_requires_namespace() {
        let api = FakeResourceApi::<PackageManifest>::empty();

        let err = list(api, "", &[]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to list packagemanifests, 'nsname' parameter is empty"
        );
    }

    #[tokio::test]
    async fn test_packagemanifest_list_rejects_multiple_options() {
        let api = FakeResourceApi::new([generate_packagemanifest("test", "test")]);

        let err = list(api, "test", &[ListParams::default(), ListParams::default()])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "error: more than one ListParams was passed");
    }
}
