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

//! Builder-style wrappers over the Kubernetes API.
//!
//! Each resource kind gets a builder pairing its desired state with the last
//! state observed on the cluster and the client used to reach it. Operations
//! are synchronous pass-throughs to the API: validate, one client call,
//! branch on the result. There is no retry, caching, or watch machinery.

// Core modules
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use infrastructure::kubernetes::resources::{
    DeploymentBuilder, InstallPlan, InstallPlanBuilder, InstallPlanSpec, ManagedCluster,
    ManagedClusterBuilder, ManagedClusterSpec, MultiClusterHub, MultiClusterHubBuilder,
    MultiClusterHubSpec, PackageManifest, PackageManifestBuilder, PackageManifestSpec,
    PerformanceProfile, PerformanceProfileBuilder, PerformanceProfileSpec, Presence,
    ResourceBuilder,
};
pub use infrastructure::kubernetes::{ApiScope, ApiSettings, FakeResourceApi, ResourceApi};
pub use shared::{KubeError, Result};
