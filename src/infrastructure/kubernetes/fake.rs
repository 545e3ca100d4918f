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

//! In-memory stand-in for the cluster API, used by the crate's own tests and
//! available to downstream test suites.

use crate::infrastructure::kubernetes::client::ResourceApi;
use kube::api::ListParams;
use kube::core::ErrorResponse;
use kube::{Resource, ResourceExt};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

type ObjectKey = (Option<String>, String);

/// Fake `ResourceApi` backed by a map keyed by (namespace, name).
///
/// Absent names answer with an API 404, matching the live server. The
/// `failing` variant makes every call error, for exercising transport-failure
/// paths.
pub struct FakeResourceApi<K> {
    objects: Mutex<BTreeMap<ObjectKey, K>>,
    failure: Option<(u16, String)>,
}

impl<K> FakeResourceApi<K>
where
    K: Resource<DynamicType = ()> + Clone,
{
    /// Creates a fake pre-seeded with the given objects.
    pub fn new(objects: impl IntoIterator<Item = K>) -> Arc<Self> {
        let objects = objects
            .into_iter()
            .map(|object| (object_key(&object), object))
            .collect();

        Arc::new(Self {
            objects: Mutex::new(objects),
            failure: None,
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new([])
    }

    /// Creates a fake where every call fails with the given API error.
    pub fn failing(code: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            objects: Mutex::new(BTreeMap::new()),
            failure: Some((code, message.to_string())),
        })
    }

    fn injected_failure(&self) -> Option<kube::Error> {
        self.failure.as_ref().map(|(code, message)| {
            kube::Error::Api(ErrorResponse {
                status: "Failure".to_string(),
                message: message.clone(),
                reason: "InternalError".to_string(),
                code: *code,
            })
        })
    }
}

fn object_key<K>(object: &K) -> ObjectKey
where
    K: Resource<DynamicType = ()>,
{
    (object.namespace(), object.name_any())
}

fn not_found(name: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: format!("\"{}\" not found", name),
        reason: "NotFound".to_string(),
        code: 404,
    })
}

#[async_trait::async_trait]
impl<K> ResourceApi<K> for FakeResourceApi<K>
where
    K: Resource<DynamicType = ()> + Clone + Debug + Send + Sync,
{
    async fn get(&self, name: &str, namespace: Option<&str>) -> kube::Result<K> {
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        let key = (namespace.map(String::from), name.to_string());
        let objects = self.objects.lock().unwrap();

        objects.get(&key).cloned().ok_or_else(|| not_found(name))
    }

    async fn replace(&self, resource: &K, namespace: Option<&str>) -> kube::Result<K> {
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        let name = resource.name_any();
        let key = (namespace.map(String::from), name.clone());
        let mut objects = self.objects.lock().unwrap();

        if !objects.contains_key(&key) {
            return Err(not_found(&name));
        }

        objects.insert(key, resource.clone());

        Ok(resource.clone())
    }

    async fn delete(&self, name: &str, namespace: Option<&str>) -> kube::Result<()> {
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        let key = (namespace.map(String::from), name.to_string());
        let mut objects = self.objects.lock().unwrap();

        objects.remove(&key).map(|_| ()).ok_or_else(|| not_found(name))
    }

    async fn list(&self, namespace: Option<&str>, _params: &ListParams) -> kube::Result<Vec<K>> {
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        let objects = self.objects.lock().unwrap();

        Ok(objects
            .iter()
            .filter(|((ns, _), _)| match namespace {
                Some(namespace) => ns.as_deref() == Some(namespace),
                None => true,
            })
            .map(|(_, object)| object.clone())
            .collect())
    }
}
