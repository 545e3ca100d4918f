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

//! Shared builder lifecycle for every resource kind: validate, then one
//! client call, then success/failure branching. Kind modules add their own
//! constructors and list functions on top of this core.

use crate::infrastructure::kubernetes::client::ResourceApi;
use crate::shared::error::{KubeError, Result};
use kube::api::ListParams;
use kube::{Resource, ResourceExt};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a presence check against the cluster.
///
/// `Unknown` carries the error that prevented a definite answer; a transport
/// failure is never taken as evidence that the resource exists.
#[derive(Debug)]
pub enum Presence {
    Present,
    Absent,
    Unknown(KubeError),
}

/// Pairs a resource's desired state with the last state observed on the
/// cluster and the client used to reach it.
///
/// `definition` is mutated by the caller before `update`; `object` is
/// refreshed by `presence`/`exists` and cleared by a successful `delete`.
pub struct ResourceBuilder<K> {
    /// Desired state of the resource as set by the caller.
    pub definition: K,
    /// Last-observed state fetched from the cluster.
    pub object: Option<K>,
    pub(crate) error_msg: Option<String>,
    pub(crate) api_client: Arc<dyn ResourceApi<K>>,
}

impl<K: Debug> Debug for ResourceBuilder<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceBuilder")
            .field("definition", &self.definition)
            .field("object", &self.object)
            .field("error_msg", &self.error_msg)
            .finish_non_exhaustive()
    }
}

impl<K> ResourceBuilder<K>
where
    K: Resource<DynamicType = ()> + Clone + Debug + Send + Sync,
{
    pub(crate) fn from_definition(api_client: Arc<dyn ResourceApi<K>>, definition: K) -> Self {
        Self {
            definition,
            object: None,
            error_msg: None,
            api_client,
        }
    }

    pub(crate) fn kind() -> String {
        K::kind(&()).into_owned()
    }

    /// Records a construction-time failure that surfaces the next time an
    /// operation validates the builder.
    pub(crate) fn defer_error(&mut self, message: impl Into<String>) {
        self.error_msg = Some(message.into());
    }

    /// Precondition shared by every operation; short-circuits on a deferred
    /// construction failure before any client call is made.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(message) = &self.error_msg {
            debug!("The {} builder has error message: {}", Self::kind(), message);

            return Err(KubeError::Validation(message.clone()));
        }

        Ok(())
    }

    /// Applies a caller-supplied mutation to the builder.
    ///
    /// A failing mutation is captured as a deferred error rather than
    /// returned, matching the chaining style of the constructors.
    pub fn with_options<F>(mut self, option: F) -> Self
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        if self.validate().is_err() {
            return self;
        }

        debug!("Setting {} additional options", Self::kind());

        if let Err(err) = option(&mut self) {
            debug!("Error occurred in mutation function: {}", err);

            self.error_msg = Some(err.to_string());
        }

        self
    }

    /// Fetches the defined resource from the cluster.
    ///
    /// Client errors pass through unmodified so callers can tell a 404 from
    /// other failures.
    pub async fn get(&self) -> Result<K> {
        self.validate()?;

        debug!("Getting {} {}", Self::kind(), self.definition.name_any());

        let namespace = self.definition.namespace();
        let object = self
            .api_client
            .get(&self.definition.name_any(), namespace.as_deref())
            .await?;

        Ok(object)
    }

    /// Sends `definition` as the desired state to the cluster.
    ///
    /// On success `object` reflects the server-returned state and the builder
    /// is handed back for chaining.
    pub async fn update(mut self) -> Result<Self> {
        self.validate()?;

        debug!(
            "Updating {} {} in the namespace {:?}",
            Self::kind(),
            self.definition.name_any(),
            self.definition.namespace()
        );

        let namespace = self.definition.namespace();
        let updated = self
            .api_client
            .replace(&self.definition, namespace.as_deref())
            .await?;

        self.object = Some(updated);

        Ok(self)
    }

    /// Removes the resource from the cluster.
    ///
    /// Fails when the resource does not exist. On success `object` is cleared
    /// and server-assigned identity fields on `definition` are reset, so the
    /// builder represents "not yet created" state again.
    pub async fn delete(&mut self) -> Result<()> {
        self.validate()?;

        debug!(
            "Deleting the {} {} in the namespace {:?}",
            Self::kind(),
            self.definition.name_any(),
            self.definition.namespace()
        );

        match self.presence().await {
            Presence::Absent => {
                return Err(KubeError::NotFound(format!(
                    "{} cannot be deleted because it does not exist",
                    Self::kind()
                )));
            }
            Presence::Unknown(err) => return Err(err),
            Presence::Present => {}
        }

        let namespace = self.definition.namespace();
        self.api_client
            .delete(&self.definition.name_any(), namespace.as_deref())
            .await
            .map_err(|err| KubeError::Delete {
                kind: Self::kind(),
                source: err,
            })?;

        self.object = None;

        let meta = self.definition.meta_mut();
        meta.resource_version = None;
        meta.creation_timestamp = None;

        Ok(())
    }

    /// Checks whether the defined resource exists on the cluster, refreshing
    /// `object` as a side effect.
    pub async fn presence(&mut self) -> Presence {
        if let Err(err) = self.validate() {
            return Presence::Unknown(err);
        }

        debug!(
            "Checking if {} {} exists",
            Self::kind(),
            self.definition.name_any()
        );

        match self.get().await {
            Ok(object) => {
                self.object = Some(object);

                Presence::Present
            }
            Err(err) if err.is_not_found() => {
                self.object = None;

                Presence::Absent
            }
            Err(err) => Presence::Unknown(err),
        }
    }

    /// Boolean convenience over [`presence`](Self::presence): only a
    /// confirmed `Present` counts as existing.
    pub async fn exists(&mut self) -> bool {
        matches!(self.presence().await, Presence::Present)
    }

    /// Loads the live state of an existing resource into the builder,
    /// replacing `definition` so subsequent mutations apply to it.
    pub(crate) async fn pull_existing(mut self) -> Result<Self> {
        let name = self.definition.name_any();

        match self.presence().await {
            Presence::Present => {
                if let Some(object) = self.object.clone() {
                    self.definition = object;
                }

                Ok(self)
            }
            // A deferred usage error reads the same as a missing resource
            // here, matching the historical pull contract.
            Presence::Absent | Presence::Unknown(KubeError::Validation(_)) => {
                Err(KubeError::NotFound(format!(
                    "{} object {} does not exist",
                    Self::kind(),
                    name
                )))
            }
            Presence::Unknown(err) => Err(err),
        }
    }
}

/// Lists resources and wraps every returned item in its own builder.
///
/// At most one `ListParams` may be passed; each builder owns an independent
/// copy of its list element.
pub(crate) async fn list_resources<K>(
    api_client: Arc<dyn ResourceApi<K>>,
    namespace: Option<&str>,
    options: &[ListParams],
) -> Result<Vec<ResourceBuilder<K>>>
where
    K: Resource<DynamicType = ()> + Clone + Debug + Send + Sync,
{
    let params = match options {
        [] => ListParams::default(),
        [single] => single.clone(),
        _ => {
            debug!("'options' parameter must be empty or single-valued");

            return Err(KubeError::Validation(
                "error: more than one ListParams was passed".to_string(),
            ));
        }
    };

    debug!(
        "Listing {} resources in the namespace {:?} with the options {:?}",
        ResourceBuilder::<K>::kind(),
        namespace,
        params
    );

    let items = api_client.list(namespace, &params).await.map_err(|err| {
        debug!(
            "Failed to list {} resources due to {}",
            ResourceBuilder::<K>::kind(),
            err
        );

        KubeError::Client(err)
    })?;

    let builders = items
        .into_iter()
        .map(|item| ResourceBuilder {
            definition: item.clone(),
            object: Some(item),
            error_msg: None,
            api_client: api_client.clone(),
        })
        .collect();

    Ok(builders)
}
