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
use crate::infrastructure::kubernetes::resources::builder::ResourceBuilder;
use crate::shared::error::Result;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Cluster-scoped registration record for a spoke cluster.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "cluster.open-cluster-management.io",
    version = "v1",
    kind = "ManagedCluster"
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterSpec {
    #[serde(default)]
    pub hub_accepts_client: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_duration_seconds: Option<i32>,
}

pub type ManagedClusterBuilder = ResourceBuilder<ManagedCluster>;

impl ManagedClusterBuilder {
    /// Creates a new builder around a blank ManagedCluster definition.
    pub fn new(api_client: Arc<dyn ResourceApi<ManagedCluster>>, name: &str) -> Self {
        debug!(
            "Initializing new ManagedCluster structure with the following params: name: {}",
            name
        );

        let definition = ManagedCluster::new(name, ManagedClusterSpec::default());

        let mut builder = ResourceBuilder::from_definition(api_client, definition);

        if name.is_empty() {
            debug!("The name of the ManagedCluster is empty");

            builder.defer_error("managedCluster 'name' cannot be empty");
        }

        builder
    }

    /// Loads an existing ManagedCluster into a builder.
    pub async fn pull(api_client: Arc<dyn ResourceApi<ManagedCluster>>, name: &str) -> Result<Self> {
        debug!("Pulling existing ManagedCluster name: {}", name);

        Self::new(api_client, name).pull_existing().await
    }

    pub fn with_hub_accepts_client(mut self, accepts: bool) -> Self {
        if self.validate().is_err() {
            return self;
        }

        self.definition.spec.hub_accepts_client = accepts;

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::fake::FakeResourceApi;

    fn generate_managedcluster(name: &str) -> ManagedCluster {
        ManagedCluster::new(name, ManagedClusterSpec::default())
    }

    #[tokio::test]
    async fn test_managedcluster_pull() {
        let api = FakeResourceApi::new([generate_managedcluster("test")]);

        let builder = ManagedClusterBuilder::pull(api.clone(), "test").await.unwrap();
        assert_eq!(builder.definition.metadata.name.as_deref(), Some("test"));

        let err = ManagedClusterBuilder::pull(api.clone(), "missing")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "ManagedCluster object missing does not exist");

        let err = ManagedClusterBuilder::pull(api, "").await.unwrap_err();
        assert_eq!(err.to_string(), "ManagedCluster object  does not exist");
    }

    #[tokio::test]
    async fn test_managedcluster_empty_name_defers_error() {
        let api = FakeResourceApi::<ManagedCluster>::empty();

        let builder = ManagedClusterBuilder::new(api, "");

        let err = builder.get().await.unwrap_err();
        assert_eq!(err.to_string(), "managedCluster 'name' cannot be empty");
    }

    #[tokio::test]
    async fn test_managedcluster_update() {
        let api = FakeResourceApi::new([generate_managedcluster("test")]);

        let builder = ManagedClusterBuilder::pull(api, "test").await.unwrap();
        let builder = builder.with_hub_accepts_client(true).update().await.unwrap();

        assert!(builder.object.as_ref().unwrap().spec.hub_accepts_client);
    }

    #[tokio::test]
    async fn test_managedcluster_delete_and_exists() {
        let api = FakeResourceApi::new([generate_managedcluster("test")]);

        let mut builder = ManagedClusterBuilder::pull(api, "test").await.unwrap();

        assert!(builder.exists().await);

        builder.delete().await.unwrap();

        assert!(!builder.exists().await);

        let err = builder.delete().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "ManagedCluster cannot be deleted because it does not exist"
        );
    }
}
