use crate::license_report::domain::{
    DependencyRef, DependencyRow, LicenseIdentityTable, LicenseInfo, LicenseOverride,
    ResolutionFailure, ResolutionStage, UserLicense,
};
use crate::license_report::policies::LicenseOverridePolicy;
use crate::ports::outbound::ProjectResolver;

/// Outcome of collecting one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedDependency {
    pub row: DependencyRow,
    pub failures: Vec<ResolutionFailure>,
}

/// Outcome of a whole collection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// One row per dependency in input order, then one per external override
    pub rows: Vec<DependencyRow>,
    pub failures: Vec<ResolutionFailure>,
}

/// LicenseCollector - resolves the licenses of each dependency
///
/// For every dependency the newest published version is pinned, its project
/// metadata is built through the [`ProjectResolver`], and the licenses come
/// from the first matching non-external override or else from the project's
/// own metadata. Every license is recorded in the run's
/// [`LicenseIdentityTable`]. Resolver failures are logged and recovered per
/// dependency; nothing is retried.
pub struct LicenseCollector<'a, R: ProjectResolver + ?Sized> {
    resolver: &'a R,
    overrides: &'a [LicenseOverride],
    user_licenses: &'a [UserLicense],
}

impl<'a, R: ProjectResolver + ?Sized> LicenseCollector<'a, R> {
    pub fn new(
        resolver: &'a R,
        overrides: &'a [LicenseOverride],
        user_licenses: &'a [UserLicense],
    ) -> Self {
        Self {
            resolver,
            overrides,
            user_licenses,
        }
    }

    /// Collects every dependency in order, then appends the external overrides.
    ///
    /// `on_dependency` is called with the 1-based position, the total and the
    /// dependency before each one is resolved.
    pub fn collect<F>(
        &self,
        dependencies: &[DependencyRef],
        table: &mut LicenseIdentityTable,
        mut on_dependency: F,
    ) -> Collection
    where
        F: FnMut(usize, usize, &DependencyRef),
    {
        let mut collection = Collection {
            rows: Vec::with_capacity(dependencies.len()),
            failures: Vec::new(),
        };
        let total = dependencies.len();

        for (index, dependency) in dependencies.iter().enumerate() {
            on_dependency(index + 1, total, dependency);
            let collected = self.collect_dependency(dependency, table);
            collection.rows.push(collected.row);
            collection.failures.extend(collected.failures);
        }

        collection.rows.extend(self.collect_external(table));
        collection
    }

    /// Resolves a single dependency into its report row.
    pub fn collect_dependency(
        &self,
        dependency: &DependencyRef,
        table: &mut LicenseIdentityTable,
    ) -> CollectedDependency {
        let declared = dependency.coordinate();
        let mut failures = Vec::new();

        // A failed version lookup keeps the declared version and artifact id
        let (coordinate, keep_declared_name) = match self.resolver.available_versions(declared)
        {
            Ok(versions) => match versions.into_iter().max() {
                Some(newest) => {
                    if newest.as_str() != declared.version() {
                        tracing::debug!(
                            dependency = %declared,
                            pinned = %newest,
                            "pinned newest available version"
                        );
                    }
                    (declared.with_version(newest.as_str()), false)
                }
                None => (declared.clone(), false),
            },
            Err(e) => {
                tracing::warn!(
                    dependency = %declared,
                    error = %e,
                    "could not list available versions, using declared version"
                );
                failures.push(ResolutionFailure::new(
                    declared.clone(),
                    ResolutionStage::VersionLookup,
                    e.to_string(),
                ));
                (declared.clone(), true)
            }
        };

        let project = match self.resolver.resolve_project(&coordinate) {
            Ok(project) => project,
            Err(e) => {
                tracing::warn!(
                    dependency = %coordinate,
                    error = %e,
                    "could not resolve project metadata"
                );
                failures.push(ResolutionFailure::new(
                    coordinate,
                    ResolutionStage::ProjectBuild,
                    e.to_string(),
                ));
                return CollectedDependency {
                    row: DependencyRow::new(dependency.artifact_id(), ""),
                    failures,
                };
            }
        };

        let licenses = match LicenseOverridePolicy::resolve(
            project.group_id(),
            project.artifact_id(),
            self.overrides,
            self.user_licenses,
        ) {
            Some(mapped) => {
                tracing::debug!(dependency = %coordinate, "license override applied");
                mapped
            }
            None => project.licenses().to_vec(),
        };

        record_licenses(&licenses, table);

        let display_name = if keep_declared_name {
            dependency.artifact_id()
        } else {
            project.display_name()
        };

        CollectedDependency {
            row: DependencyRow::from_names(display_name, licenses.iter().map(LicenseInfo::name)),
            failures,
        }
    }

    /// One row per external override, in declaration order.
    pub fn collect_external(&self, table: &mut LicenseIdentityTable) -> Vec<DependencyRow> {
        self.overrides
            .iter()
            .filter(|o| o.is_external())
            .filter_map(|o| {
                let artifact_id = o.artifact_id()?;
                let licenses = o.mapped_licenses(self.user_licenses);
                record_licenses(&licenses, table);
                Some(DependencyRow::from_names(
                    artifact_id,
                    licenses.iter().map(LicenseInfo::name),
                ))
            })
            .collect()
    }
}

fn record_licenses(licenses: &[LicenseInfo], table: &mut LicenseIdentityTable) {
    for license in licenses {
        table.get_or_insert(license.url(), license.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_report::domain::{ArtifactCoordinate, ArtifactVersion, ProjectMetadata};
    use crate::shared::Result;
    use std::cell::RefCell;
    use std::collections::HashMap;

    const APACHE_URL: &str = "https://www.apache.org/licenses/LICENSE-2.0";

    /// In-memory resolver keyed by `group:artifact` and `group:artifact:version`
    #[derive(Default)]
    struct StubResolver {
        versions: HashMap<String, Vec<&'static str>>,
        projects: HashMap<String, ProjectMetadata>,
        resolved: RefCell<Vec<String>>,
    }

    impl StubResolver {
        fn with_project(
            mut self,
            group: &str,
            artifact: &str,
            version: &str,
            name: &str,
            licenses: Vec<LicenseInfo>,
        ) -> Self {
            self.projects.insert(
                format!("{}:{}:{}", group, artifact, version),
                ProjectMetadata::new(
                    group.to_string(),
                    artifact.to_string(),
                    version.to_string(),
                    Some(name.to_string()),
                    licenses,
                ),
            );
            self
        }

        fn with_versions(mut self, group: &str, artifact: &str, versions: Vec<&'static str>) -> Self {
            self.versions
                .insert(format!("{}:{}", group, artifact), versions);
            self
        }
    }

    impl ProjectResolver for StubResolver {
        fn available_versions(
            &self,
            coordinate: &ArtifactCoordinate,
        ) -> Result<Vec<ArtifactVersion>> {
            let key = format!("{}:{}", coordinate.group_id(), coordinate.artifact_id());
            match self.versions.get(&key) {
                Some(versions) => Ok(versions.iter().map(|v| ArtifactVersion::parse(v)).collect()),
                None => anyhow::bail!("unknown artifact {}", key),
            }
        }

        fn resolve_project(&self, coordinate: &ArtifactCoordinate) -> Result<ProjectMetadata> {
            self.resolved.borrow_mut().push(coordinate.to_string());
            self.projects
                .get(&coordinate.to_string())
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no metadata for {}", coordinate))
        }
    }

    fn dep(group: &str, artifact: &str, version: &str) -> DependencyRef {
        DependencyRef::new(
            group.to_string(),
            artifact.to_string(),
            version.to_string(),
            None,
        )
        .unwrap()
    }

    fn apache(name: &str) -> LicenseInfo {
        LicenseInfo::new(name, Some(APACHE_URL.to_string()))
    }

    #[test]
    fn test_pins_newest_version() {
        let resolver = StubResolver::default()
            .with_versions("org.a", "lib", vec!["1.2", "1.10", "1.9"])
            .with_project("org.a", "lib", "1.10", "Lib", vec![apache("Apache 2.0")]);
        let collector = LicenseCollector::new(&resolver, &[], &[]);
        let mut table = LicenseIdentityTable::new();

        let collected = collector.collect_dependency(&dep("org.a", "lib", "1.2"), &mut table);

        assert_eq!(collected.row, DependencyRow::new("Lib", "Apache 2.0"));
        assert!(collected.failures.is_empty());
        assert_eq!(*resolver.resolved.borrow(), vec!["org.a:lib:1.10".to_string()]);
    }

    #[test]
    fn test_empty_version_list_keeps_declared_version() {
        let resolver = StubResolver::default()
            .with_versions("org.a", "lib", vec![])
            .with_project("org.a", "lib", "1.2", "Lib", vec![]);
        let collector = LicenseCollector::new(&resolver, &[], &[]);
        let mut table = LicenseIdentityTable::new();

        let collected = collector.collect_dependency(&dep("org.a", "lib", "1.2"), &mut table);
        assert_eq!(collected.row, DependencyRow::new("Lib", ""));
        assert!(collected.failures.is_empty());
    }

    #[test]
    fn test_version_lookup_failure_continues_with_declared_version() {
        let resolver = StubResolver::default().with_project(
            "org.a",
            "lib",
            "1.2",
            "Lib",
            vec![apache("Apache 2.0")],
        );
        let collector = LicenseCollector::new(&resolver, &[], &[]);
        let mut table = LicenseIdentityTable::new();

        let collected = collector.collect_dependency(&dep("org.a", "lib", "1.2"), &mut table);

        assert_eq!(collected.row, DependencyRow::new("lib", "Apache 2.0"));
        assert_eq!(collected.failures.len(), 1);
        assert_eq!(collected.failures[0].stage(), ResolutionStage::VersionLookup);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_project_failure_yields_empty_row() {
        let resolver = StubResolver::default().with_versions("org.a", "missing", vec!["2.0"]);
        let collector = LicenseCollector::new(&resolver, &[], &[]);
        let mut table = LicenseIdentityTable::new();

        let collected =
            collector.collect_dependency(&dep("org.a", "missing", "1.0"), &mut table);

        assert_eq!(collected.row, DependencyRow::new("missing", ""));
        assert_eq!(collected.failures.len(), 1);
        assert_eq!(collected.failures[0].stage(), ResolutionStage::ProjectBuild);
        assert_eq!(collected.failures[0].coordinate().version(), "2.0");
        assert!(table.is_empty());
    }

    #[test]
    fn test_one_failure_does_not_stop_the_run() {
        let resolver = StubResolver::default()
            .with_versions("org.a", "first", vec!["1.0"])
            .with_versions("org.a", "third", vec!["1.0"])
            .with_project("org.a", "first", "1.0", "First", vec![apache("Apache 2.0")])
            .with_project("org.a", "third", "1.0", "Third", vec![apache("ASL")]);
        let collector = LicenseCollector::new(&resolver, &[], &[]);
        let mut table = LicenseIdentityTable::new();
        let mut seen = Vec::new();

        let collection = collector.collect(
            &[
                dep("org.a", "first", "1.0"),
                dep("org.a", "second", "1.0"),
                dep("org.a", "third", "1.0"),
            ],
            &mut table,
            |current, total, dependency| {
                seen.push((current, total, dependency.artifact_id().to_string()));
            },
        );

        assert_eq!(
            seen,
            vec![
                (1, 3, "first".to_string()),
                (2, 3, "second".to_string()),
                (3, 3, "third".to_string()),
            ]
        );

        assert_eq!(
            collection.rows,
            vec![
                DependencyRow::new("First", "Apache 2.0"),
                DependencyRow::new("second", ""),
                DependencyRow::new("Third", "ASL"),
            ]
        );
        assert_eq!(collection.failures.len(), 2);
        // first-seen name wins for the shared url
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].name(), "Apache 2.0");
    }

    #[test]
    fn test_override_replaces_published_license() {
        let resolver = StubResolver::default()
            .with_versions("org.a", "x", vec!["1.0"])
            .with_project("org.a", "x", "1.0", "x", vec![apache("Apache-2.0")]);
        let overrides =
            vec![LicenseOverride::from_parts(0, Some("x"), None, "L1", false).unwrap()];
        let user_licenses = vec![UserLicense::new(
            "L1",
            LicenseInfo::new("Custom License", Some("u1".to_string())),
        )];
        let collector = LicenseCollector::new(&resolver, &overrides, &user_licenses);
        let mut table = LicenseIdentityTable::new();

        let collection = collector.collect(&[dep("org.a", "x", "1.0")], &mut table, |_, _, _| {});

        assert_eq!(collection.rows, vec![DependencyRow::new("x", "Custom License")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].url(), Some("u1"));
        assert_eq!(table.entries()[0].name(), "Custom License");
    }

    #[test]
    fn test_external_overrides_always_add_a_row() {
        let resolver = StubResolver::default();
        let overrides = vec![
            LicenseOverride::from_parts(0, Some("vendored-blob"), None, "prop", true).unwrap(),
            LicenseOverride::from_parts(1, Some("other-blob"), None, "missing", true).unwrap(),
        ];
        let user_licenses = vec![UserLicense::new(
            "prop",
            LicenseInfo::new("Proprietary", None),
        )];
        let collector = LicenseCollector::new(&resolver, &overrides, &user_licenses);
        let mut table = LicenseIdentityTable::new();

        let collection = collector.collect(&[], &mut table, |_, _, _| {});

        assert_eq!(
            collection.rows,
            vec![
                DependencyRow::new("vendored-blob", "Proprietary"),
                DependencyRow::new("other-blob", ""),
            ]
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_external_rows_follow_dependency_rows() {
        let resolver = StubResolver::default()
            .with_versions("org.a", "lib", vec!["1.0"])
            .with_project("org.a", "lib", "1.0", "Lib", vec![]);
        let overrides =
            vec![LicenseOverride::from_parts(0, Some("lib"), None, "prop", true).unwrap()];
        let user_licenses = vec![UserLicense::new(
            "prop",
            LicenseInfo::new("Proprietary", None),
        )];
        let collector = LicenseCollector::new(&resolver, &overrides, &user_licenses);
        let mut table = LicenseIdentityTable::new();

        let collection = collector.collect(&[dep("org.a", "lib", "1.0")], &mut table, |_, _, _| {});

        // the external override does not apply to the live dependency
        assert_eq!(
            collection.rows,
            vec![
                DependencyRow::new("Lib", ""),
                DependencyRow::new("lib", "Proprietary"),
            ]
        );
    }
}
