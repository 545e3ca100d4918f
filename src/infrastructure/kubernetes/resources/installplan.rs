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

/// Operator Lifecycle Manager install plan.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "operators.coreos.com",
    version = "v1alpha1",
    kind = "InstallPlan",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct InstallPlanSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_service_version_names: Vec<String>,
}

pub type InstallPlanBuilder = ResourceBuilder<InstallPlan>;

impl InstallPlanBuilder {
    /// Creates a new builder around a blank InstallPlan definition.
    pub fn new(api_client: Arc<dyn ResourceApi<InstallPlan>>, name: &str, nsname: &str) -> Self {
        debug!(
            "Initializing new InstallPlan structure with the following params: name: {}, namespace: {}",
            name, nsname
        );

        let mut definition = InstallPlan::new(name, InstallPlanSpec::default());
        definition.metadata.namespace = Some(nsname.to_string());

        let mut builder = ResourceBuilder::from_definition(api_client, definition);

        if name.is_empty() {
            debug!("The name of the InstallPlan is empty");

            builder.defer_error("installPlan 'name' cannot be empty");
        }

        if nsname.is_empty() {
            debug!("The namespace of the InstallPlan is empty");

            builder.defer_error("installPlan 'nsname' cannot be empty");
        }

        builder
    }

    /// Loads an existing InstallPlan into a builder.
    pub async fn pull(
        api_client: Arc<dyn ResourceApi<InstallPlan>>,
        name: &str,
        nsname: &str,
    ) -> Result<Self> {
        debug!("Pulling existing InstallPlan name: {}", name);

        Self::new(api_client, name, nsname).pull_existing().await
    }
}

/// Returns the install plans found in the given namespace.
///
/// Unlike the other listing functions, an empty result set is reported as
/// not found.
pub async fn list(
    api_client: Arc<dyn ResourceApi<InstallPlan>>,
    nsname: &str,
    options: &[ListParams],
) -> Result<Vec<InstallPlanBuilder>> {
    if nsname.is_empty() {
        debug!("The nsname of the installplan is empty");

        return Err(KubeError::Validation(
            "the nsname of the installplan is empty".to_string(),
        ));
    }

    let builders = list_resources(api_client, Some(nsname), options).await?;

    if builders.is_empty() {
        return Err(KubeError::NotFound(format!(
            "installplan not found in namespace {}",
            nsname
        )));
    }

    Ok(builders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::fake::FakeResourceApi;

    fn generate_installplan(name: &str, namespace: &str) -> InstallPlan {
        let mut plan = InstallPlan::new(
            name,
            InstallPlanSpec {
                approval: Some("Automatic".to_string()),
                approved: true,
                cluster_service_version_names: vec!["operator.v1.0.0".to_string()],
            },
        );
        plan.metadata.namespace = Some(namespace.to_string());

        plan
    }

    #[tokio::test]
    async fn test_installplan_pull() {
        let api = FakeResourceApi::new([generate_installplan("test", "test")]);

        let builder = InstallPlanBuilder::pull(api.clone(), "test", "test")
            .await
            .unwrap();
        assert_eq!(builder.definition.spec.approval.as_deref(), Some("Automatic"));

        let err = InstallPlanBuilder::pull(api, "missing", "test")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "InstallPlan object missing does not exist");
    }

    #[tokio::test]
    async fn test_installplan_list() {
        let api = FakeResourceApi::new([
            generate_installplan("first", "test"),
            generate_installplan("second", "test"),
        ]);

        let builders = list(api, "test", &[]).await.unwrap();
        assert_eq!(builders.len(), 2);
    }

    #[tokio::test]
    async fn test_installplan_list_requires_namespace() {
        let api = FakeResourceApi::<InstallPlan>::empty();

        let err = list(api, "", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "the nsname of the installplan is empty");
    }

    #[tokio::test]
    async fn test_installplan_list_empty_is_not_found() {
        let api = FakeResourceApi::<InstallPlan>::empty();

        let err = list(api, "test", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "installplan not found in namespace test");
    }

    #[tokio::test]
    async fn test_installplan_list_rejects_multiple_options() {
        let api = FakeResourceApi::new([generate_installplan("test", "test")]);

        let err = list(api, "test", &[ListParams::default(), ListParams::default()])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "error: more than one ListParams was passed");
    }
}
