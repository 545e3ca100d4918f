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

/// Hub installation resource of the multicluster engine.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "operator.open-cluster-management.io",
    version = "v1",
    kind = "MultiClusterHub",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct MultiClusterHubSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_pull_secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_config: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_hub_self_management: Option<bool>,
}

pub type MultiClusterHubBuilder = ResourceBuilder<MultiClusterHub>;

impl MultiClusterHubBuilder {
    /// Creates a new builder around a blank MultiClusterHub definition.
    pub fn new(
        api_client: Arc<dyn ResourceApi<MultiClusterHub>>,
        name: &str,
        namespace: &str,
    ) -> Self {
        debug!(
            "Initializing new MultiClusterHub structure with the following params: name: {}, namespace: {}",
            name, namespace
        );

        let mut definition = MultiClusterHub::new(name, MultiClusterHubSpec::default());
        definition.metadata.namespace = Some(namespace.to_string());

        let mut builder = ResourceBuilder::from_definition(api_client, definition);

        if name.is_empty() {
            debug!("The name of the MultiClusterHub is empty");

            builder.defer_error("MultiClusterHub 'name' cannot be empty");
        }

        if namespace.is_empty() {
            debug!("The namespace of the MultiClusterHub is empty");

            builder.defer_error("MultiClusterHub 'namespace' cannot be empty");
        }

        builder
    }

    /// Loads an existing MultiClusterHub into a builder.
    pub async fn pull(
        api_client: Arc<dyn ResourceApi<MultiClusterHub>>,
        name: &str,
        namespace: &str,
    ) -> Result<Self> {
        debug!("Pulling existing MultiClusterHub name: {}", name);

        Self::new(api_client, name, namespace).pull_existing().await
    }
}
