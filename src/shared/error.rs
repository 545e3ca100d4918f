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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KubeError>;

#[derive(Error, Debug)]
pub enum KubeError {
    /// Caller passed invalid arguments or the builder carries a deferred
    /// construction failure. Never retried, never wrapped.
    #[error("{0}")]
    Validation(String),

    /// The resource is confirmed absent on the cluster.
    #[error("{0}")]
    NotFound(String),

    #[error("cannot delete {kind}: {source}")]
    Delete {
        kind: String,
        #[source]
        source: kube::Error,
    },

    /// Raw client error, passed through unmodified so callers can still
    /// discriminate 404s from other failures.
    #[error(transparent)]
    Client(#[from] kube::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KubeError {
    /// True when the wrapped client error is an API 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, KubeError::Client(kube::Error::Api(ae)) if ae.code == 404)
    }
}
