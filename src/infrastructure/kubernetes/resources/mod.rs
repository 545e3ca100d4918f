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

pub mod builder;
pub mod deployment;
pub mod installplan;
pub mod managedcluster;
pub mod multiclusterhub;
pub mod packagemanifest;
pub mod performanceprofile;

pub use builder::{Presence, ResourceBuilder};
pub use deployment::DeploymentBuilder;
pub use installplan::{InstallPlan, InstallPlanBuilder, InstallPlanSpec};
pub use managedcluster::{ManagedCluster, ManagedClusterBuilder, ManagedClusterSpec};
pub use multiclusterhub::{MultiClusterHub, MultiClusterHubBuilder, MultiClusterHubSpec};
pub use packagemanifest::{PackageManifest, PackageManifestBuilder, PackageManifestSpec};
pub use performanceprofile::{
    PerformanceProfile, PerformanceProfileBuilder, PerformanceProfileSpec,
};
