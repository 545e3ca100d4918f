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

use crate::shared::error::KubeError;
use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Resolves the right `Api` handle for a resource scope.
///
/// Namespaced kinds get a namespaced API when a namespace is supplied,
/// cluster-scoped kinds always get a cluster-wide API.
pub trait ApiScope<K>
where
    K: Resource<Scope = Self>,
{
    fn api(client: Client, namespace: Option<&str>) -> Api<K>;
}

impl<K> ApiScope<K> for NamespaceResourceScope
where
    K: Resource<Scope = Self>,
    K::DynamicType: Default,
{
    fn api(client: Client, namespace: Option<&str>) -> Api<K> {
        if let Some(namespace) = namespace {
            Api::namespaced(client, namespace)
        } else {
            Api::all(client)
        }
    }
}

impl<K> ApiScope<K> for ClusterResourceScope
where
    K: Resource<Scope = Self>,
    K::DynamicType: Default,
{
    fn api(client: Client, _: Option<&str>) -> Api<K> {
        Api::all(client)
    }
}

/// The single seam between builders and the cluster.
///
/// Every builder operation is one call through this trait; errors come back
/// as raw `kube::Error` so callers keep full visibility into API failures.
#[async_trait::async_trait]
pub trait ResourceApi<K>: Send + Sync {
    async fn get(&self, name: &str, namespace: Option<&str>) -> kube::Result<K>;

    async fn replace(&self, resource: &K, namespace: Option<&str>) -> kube::Result<K>;

    async fn delete(&self, name: &str, namespace: Option<&str>) -> kube::Result<()>;

    async fn list(&self, namespace: Option<&str>, params: &ListParams) -> kube::Result<Vec<K>>;
}

/// Production client settings wrapping a shared `kube::Client` connection.
///
/// Safe to share across builders; every call is independent and stateless.
pub struct ApiSettings {
    client: Client,
}

impl ApiSettings {
    /// Connects using the ambient environment (in-cluster config or the
    /// default kubeconfig).
    pub async fn try_default() -> Result<Self, KubeError> {
        let client = Client::try_default().await.map_err(|e| {
            KubeError::Config(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client })
    }

    /// Connects using an explicit kubeconfig path and/or context.
    pub async fn from_kubeconfig(
        kubeconfig_path: Option<String>,
        context: Option<String>,
    ) -> Result<Self, KubeError> {
        use kube::config::{KubeConfigOptions, Kubeconfig};

        let kubeconfig = if let Some(path) = kubeconfig_path {
            Kubeconfig::read_from(path)
                .map_err(|e| KubeError::Config(format!("Failed to load kubeconfig: {}", e)))?
        } else {
            Kubeconfig::read()
                .map_err(|e| KubeError::Config(format!("Failed to load kubeconfig: {}", e)))?
        };

        let config_options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
            .await
            .map_err(|e| {
                KubeError::Config(format!("Failed to create Kubernetes config: {}", e))
            })?;

        let client = Client::try_from(config).map_err(|e| {
            KubeError::Config(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client })
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    fn typed_api<K>(&self, namespace: Option<&str>) -> Api<K>
    where
        K: Resource<DynamicType = ()>,
        K::Scope: ApiScope<K>,
    {
        K::Scope::api(self.client.clone(), namespace)
    }
}

#[async_trait::async_trait]
impl<K> ResourceApi<K> for ApiSettings
where
    K: Resource<DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Serialize
        + Debug
        + Send
        + Sync,
    K::Scope: ApiScope<K>,
{
    async fn get(&self, name: &str, namespace: Option<&str>) -> kube::Result<K> {
        self.typed_api::<K>(namespace).get(name).await
    }

    async fn replace(&self, resource: &K, namespace: Option<&str>) -> kube::Result<K> {
        let name = resource.name_any();

        self.typed_api::<K>(namespace)
            .replace(&name, &PostParams::default(), resource)
            .await
    }

    async fn delete(&self, name: &str, namespace: Option<&str>) -> kube::Result<()> {
        self.typed_api::<K>(namespace)
            .delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
    }

    async fn list(&self, namespace: Option<&str>, params: &ListParams) -> kube::Result<Vec<K>> {
        self.typed_api::<K>(namespace)
            .list(params)
            .await
            .map(|list| list.items)
    }
}
