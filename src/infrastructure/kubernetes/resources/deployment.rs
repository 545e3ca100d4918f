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
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::ListParams;
use std::sync::Arc;
use tracing::debug;

pub type DeploymentBuilder = ResourceBuilder<Deployment>;

impl DeploymentBuilder {
    /// Creates a new builder around a blank Deployment definition.
    pub fn new(api_client: Arc<dyn ResourceApi<Deployment>>, name: &str, nsname: &str) -> Self {
        debug!(
            "Initializing new Deployment structure with the following params: name: {}, namespace: {}",
            name, nsname
        );

        let definition = Deployment {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(nsname.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut builder = ResourceBuilder::from_definition(api_client, definition);

        if name.is_empty() {
            debug!("The name of the Deployment is empty");

            builder.defer_error("Deployment 'name' cannot be empty");
        }

        if nsname.is_empty() {
            debug!("The namespace of the Deployment is empty");

            builder.defer_error("Deployment 'nsname' cannot be empty");
        }

        builder
    }

    /// Loads an existing Deployment into a builder.
    pub async fn pull(
        api_client: Arc<dyn ResourceApi<Deployment>>,
        name: &str,
        nsname: &str,
    ) -> Result<Self> {
        debug!("Pulling existing Deployment name: {}", name);

        Self::new(api_client, name, nsname).pull_existing().await
    }

    pub fn with_replicas(mut self, replicas: i32) -> Self {
        if self.validate().is_err() {
            return self;
        }

        self.definition
            .spec
            .get_or_insert_with(Default::default)
            .replicas = Some(replicas);

        self
    }
}

/// Returns the Deployment inventory in the given namespace.
pub async fn list(
    api_client: Arc<dyn ResourceApi<Deployment>>,
    nsname: &str,
    options: &[ListParams],
) -> Result<Vec<DeploymentBuilder>> {
    if nsname.is_empty() {
        debug!("deployment 'nsname' parameter can not be empty");

        return Err(KubeError::Validation(
            "failed to list deployments, 'nsname' parameter is empty".to_string(),
        ));
    }

    list_resources(api_client, Some(nsname), options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::fake::FakeResourceApi;

    fn generate_deployment(name: &str, namespace: &str) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_deployment_pull() {
        let api = FakeResourceApi::new([generate_deployment("test", "test")]);

        let builder = DeploymentBuilder::pull(api.clone(), "test", "test")
            .await
            .unwrap();
        assert_eq!(builder.definition.metadata.name.as_deref(), Some("test"));

        let err = DeploymentBuilder::pull(api.clone(), "missing", "test")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Deployment object missing does not exist");

        let err = DeploymentBuilder::pull(api, "", "test").await.unwrap_err();
        assert_eq!(err.to_string(), "Deployment object  does not exist");
    }

    #[tokio::test]
    async fn test_deployment_with_replicas_update() {
        let api = FakeResourceApi::new([generate_deployment("test", "test")]);

        let builder = DeploymentBuilder::pull(api, "test", "test").await.unwrap();
        let builder = builder.with_replicas(5).update().await.unwrap();

        let replicas = builder
            .object
            .as_ref()
            .and_then(|object| object.spec.as_ref())
            .and_then(|spec| spec.replicas);
        assert_eq!(replicas, Some(5));
    }

    #[tokio::test]
    async fn test_deployment_list() {
        let api = FakeResourceApi::new([
            generate_deployment("first", "test"),
            generate_deployment("second", "test"),
        ]);

        let builders = list(api, "test", &[]).await.unwrap();
        assert_eq!(builders.len(), 2);
    }

    #[tokio::test]
    async fn test_deployment_list_requires_namespace() {
        let api = FakeResourceApi::new([generate_deployment("test", "test")]);

        let err = list(api, "", &[]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to list deployments, 'nsname' parameter is empty"
        );
    }

    #[tokio::test]
    async fn test_deployment_list_rejects_multiple_options() {
        let api = FakeResourceApi::new([generate_deployment("test", "test")]);

        let err = list(api, "test", &[ListParams::default(), ListParams::default()])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "error: more than one ListParams was passed");
    }

    #[tokio::test]
    async fn test_deployment_list_empty_is_ok() {
        let api = FakeResourceApi::<Deployment>::empty();

        let builders = list(api, "test", &[]).await.unwrap();
        assert!(builders.is_empty());
    }
}
