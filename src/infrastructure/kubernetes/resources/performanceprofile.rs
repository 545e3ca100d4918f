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
use crate::shared::error::Result;
use kube::api::ListParams;
use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Node tuning profile for low-latency workloads.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "performance.openshift.io",
    version = "v2",
    kind = "PerformanceProfile"
)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceProfileSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_time_kernel: Option<RealTimeKernelConfig>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct CpuConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct RealTimeKernelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

pub type PerformanceProfileBuilder = ResourceBuilder<PerformanceProfile>;

impl PerformanceProfileBuilder {
    /// Creates a new builder around a blank PerformanceProfile definition.
    pub fn new(api_client: Arc<dyn ResourceApi<PerformanceProfile>>, name: &str) -> Self {
        debug!(
            "Initializing new PerformanceProfile structure with the following params: name: {}",
            name
        );

        let definition = PerformanceProfile::new(name, PerformanceProfileSpec::default());

        let mut builder = ResourceBuilder::from_definition(api_client, definition);

        if name.is_empty() {
            debug!("The name of the PerformanceProfile is empty");

            builder.defer_error("performanceProfile 'name' cannot be empty");
        }

        builder
    }

    /// Loads an existing PerformanceProfile into a builder.
    pub async fn pull(
        api_client: Arc<dyn ResourceApi<PerformanceProfile>>,
        name: &str,
    ) -> Result<Self> {
        debug!("Pulling existing PerformanceProfile name: {}", name);

        Self::new(api_client, name).pull_existing().await
    }

    pub fn with_cpu(mut self, isolated: &str, reserved: &str) -> Self {
        if self.validate().is_err() {
            return self;
        }

        self.definition.spec.cpu = Some(CpuConfig {
            isolated: Some(isolated.to_string()),
            reserved: Some(reserved.to_string()),
        });

        self
    }
}

/// Returns a list of all installed PerformanceProfiles.
pub async fn list_profiles(
    api_client: Arc<dyn ResourceApi<PerformanceProfile>>,
    options: &[ListParams],
) -> Result<Vec<PerformanceProfileBuilder>> {
    debug!("Listing PerformanceProfiles on cluster");

    list_resources(api_client, None, options).await
}

/// Removes all PerformanceProfiles installed on a cluster.
///
/// Deletions run in sequence; the first failure aborts the sweep and is
/// returned as-is.
pub async fn clean_all_performance_profiles(
    api_client: Arc<dyn ResourceApi<PerformanceProfile>>,
    options: &[ListParams],
) -> Result<()> {
    debug!("Cleaning up PerformanceProfiles");

    let profiles = list_profiles(api_client, options).await.map_err(|err| {
        debug!("Failed to list PerformanceProfiles");

        err
    })?;

    for mut profile in profiles {
        if let Err(err) = profile.delete().await {
            debug!(
                "Failed to delete PerformanceProfile: {}",
                profile.definition.name_any()
            );

            return Err(err);
        }
    }

    Ok(())
}
