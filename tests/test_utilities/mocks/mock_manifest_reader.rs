use spdx_license_report::prelude::*;
use std::path::Path;

/// Mock ManifestReader returning a fixed manifest
pub struct MockManifestReader {
    manifest: ProjectManifest,
}

impl MockManifestReader {
    pub fn new(name: &str, declared: Vec<LicenseInfo>) -> Self {
        Self {
            manifest: ProjectManifest {
                project: ProjectDescriptor::new(name.to_string(), declared),
                dependencies: vec![],
            },
        }
    }

    pub fn with_dependency(
        mut self,
        group: &str,
        artifact: &str,
        version: &str,
        scope: Option<&str>,
    ) -> Self {
        self.manifest.dependencies.push(
            DependencyRef::new(
                group.to_string(),
                artifact.to_string(),
                version.to_string(),
                scope.map(String::from),
            )
            .unwrap(),
        );
        self
    }

    pub fn with_project(mut self, project: ProjectDescriptor) -> Self {
        self.manifest.project = project;
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _path: &Path) -> Result<ProjectManifest> {
        Ok(self.manifest.clone())
    }
}
