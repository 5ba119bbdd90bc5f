// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::time::Duration;

use crate::engine::{MeshBuilder, MeshState};
use crate::version::BuildInfo;

/// Point-in-time health of every instance in a mesh, in startup order.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub build: BuildInfo,
    pub state: String,
    pub grace_period_ms: u128,
    pub instances: Vec<InstanceHealth>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceHealth {
    pub name: String,
    pub kind: &'static str,
    pub ready: bool,
    pub alive: bool,
    pub configuration_uuid: String,
    pub configuration_version: u64,
}

impl HealthReport {
    /// Poll each instance once. An instance is alive if it recorded
    /// liveness within `grace_period`.
    pub fn collect(mesh: &MeshBuilder, grace_period: Duration) -> Self {
        let instances = mesh
            .instances()
            .map(|(name, component)| {
                let processor = component.processor();
                let heartbeat = processor.heartbeat();
                InstanceHealth {
                    name: name.to_string(),
                    kind: component.kind(),
                    ready: processor.is_ready(),
                    alive: processor.is_alive(grace_period),
                    configuration_uuid: heartbeat.configuration_uuid,
                    configuration_version: heartbeat.configuration_version,
                }
            })
            .collect();

        Self {
            build: BuildInfo::current(),
            state: mesh.state().to_string(),
            grace_period_ms: grace_period.as_millis(),
            instances,
        }
    }

    /// True when the mesh is running and every instance is ready.
    pub fn all_ready(&self) -> bool {
        self.state == MeshState::Running.to_string() && self.instances.iter().all(|i| i.ready)
    }

    pub fn all_alive(&self) -> bool {
        self.instances.iter().all(|i| i.alive)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::LocalProcessorFactory;
    use crate::config::Blueprint;
    use crate::proto::Configuration;
    use crate::test_support::poll_until;

    fn mesh() -> MeshBuilder {
        let blueprint = Blueprint::from_yaml_str(
            r#"
localInstances:
- name: Instance1
  type: ExampleProcessor
- name: Instance2
  type: ExampleService
"#,
        )
        .unwrap();
        let mut mesh = MeshBuilder::new(blueprint);
        LocalProcessorFactory::register_builtins(&mut mesh, Duration::from_millis(20)).unwrap();
        mesh
    }

    #[test]
    fn test_report_before_run_is_empty() {
        let report = HealthReport::collect(&mesh(), Duration::from_secs(1));

        assert_eq!(report.state, "empty");
        assert!(report.instances.is_empty());
        assert!(!report.all_ready());
    }

    #[tokio::test]
    async fn test_report_reflects_running_mesh() {
        let mut mesh = mesh();
        assert!(mesh.run().await.is_empty());
        assert!(mesh.wait_until_ready(Duration::from_secs(10)).await);

        mesh.instance("Instance2")
            .unwrap()
            .processor()
            .update_configuration(&Configuration {
                uuid: "conf-1".to_string(),
                version: 3,
                info: String::new(),
            })
            .unwrap();
        poll_until(|| HealthReport::collect(&mesh, Duration::from_secs(1)).all_alive()).await;

        let report = HealthReport::collect(&mesh, Duration::from_secs(1));
        assert!(report.all_ready());
        let kinds: Vec<_> = report.instances.iter().map(|i| (i.name.as_str(), i.kind)).collect();
        assert_eq!(kinds, vec![("Instance1", "processor"), ("Instance2", "service")]);
        assert_eq!(report.instances[1].configuration_uuid, "conf-1");
        assert_eq!(report.instances[1].configuration_version, 3);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["state"], "running");
        assert_eq!(json["instances"][0]["name"], "Instance1");
        assert_eq!(json["build"]["app_name"], "the-meshwork");

        assert!(mesh.shutdown().await.is_empty());
        poll_until(|| !HealthReport::collect(&mesh, Duration::from_secs(1)).instances[0].ready).await;
        assert!(!HealthReport::collect(&mesh, Duration::from_secs(1)).all_ready());
    }
}
