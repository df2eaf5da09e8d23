use crate::application::dto::{ReportRequest, ReportResponse};
use crate::license_report::domain::{DependencyRef, LicenseIdentityTable, ProjectDescriptor};
use crate::license_report::services::{
    Collection, CreationInfoGenerator, DependencyFilter, DocumentAssembler, LicenseCollector,
};
use crate::ports::outbound::{ManifestReader, ProgressReporter, ProjectResolver};
use crate::shared::Result;

/// GenerateReportUseCase - Core use case for license report generation
///
/// Reads the project manifest, filters its dependencies, resolves the
/// licenses of each one and assembles the package document. Formatting and
/// writing the document are left to the caller.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `RES` - ProjectResolver implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<MR, RES, PR> {
    manifest_reader: MR,
    resolver: RES,
    progress_reporter: PR,
}

impl<MR, RES, PR> GenerateReportUseCase<MR, RES, PR>
where
    MR: ManifestReader,
    RES: ProjectResolver,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(manifest_reader: MR, resolver: RES, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            resolver,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Fails when the manifest cannot be read or the filter settings are
    /// invalid. Per-dependency resolver failures are recovered and listed in
    /// the response instead.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Read the project manifest
        let (project, dependencies) = self.read_manifest(&request)?;
        let declared_count = dependencies.len();

        // Step 2: Apply scope and prefix filters
        let included = self.apply_filters(dependencies, &request)?;
        let included_count = included.len();

        // Step 3: Resolve licenses
        let mut table = LicenseIdentityTable::new();
        let collection = self.collect_licenses(&included, &request, &mut table);

        // Step 4: Assemble the document
        let project = Self::apply_request_overrides(project, &request);
        let document = DocumentAssembler::assemble(
            &project,
            collection.rows,
            &table,
            CreationInfoGenerator::generate_default(),
        );

        Ok(ReportResponse::new(
            document,
            declared_count,
            included_count,
            collection.failures,
        ))
    }

    /// Reads the manifest, reporting progress
    fn read_manifest(
        &self,
        request: &ReportRequest,
    ) -> Result<(ProjectDescriptor, Vec<DependencyRef>)> {
        self.progress_reporter.report(&format!(
            "📖 Loading project manifest from: {}",
            request.project_path.display()
        ));

        let manifest = self.manifest_reader.read_manifest(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} dependency(ies) in {}",
            manifest.dependencies.len(),
            manifest.project.name()
        ));

        Ok((manifest.project, manifest.dependencies))
    }

    /// Keeps the dependencies whose scope is selected and whose group is
    /// not excluded. An empty result is a valid, empty report.
    fn apply_filters(
        &self,
        dependencies: Vec<DependencyRef>,
        request: &ReportRequest,
    ) -> Result<Vec<DependencyRef>> {
        let filter = DependencyFilter::new(&request.scopes, request.exclude_prefixes.clone())?;
        let original_count = dependencies.len();
        let included = filter.filter(dependencies);

        let excluded_count = original_count - included.len();
        if excluded_count > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} dependency(ies) by scope or group filters",
                excluded_count
            ));
        }

        for prefix in filter.unmatched_prefixes() {
            tracing::warn!(%prefix, "exclusion prefix did not match any dependency");
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude prefix '{}' did not match any dependencies.",
                prefix
            ));
        }

        Ok(included)
    }

    /// Resolves each dependency in order, then appends the external overrides
    fn collect_licenses(
        &self,
        dependencies: &[DependencyRef],
        request: &ReportRequest,
        table: &mut LicenseIdentityTable,
    ) -> Collection {
        self.progress_reporter
            .report("🔍 Resolving license information...");

        let collector =
            LicenseCollector::new(&self.resolver, &request.overrides, &request.user_licenses);
        let collection = collector.collect(dependencies, table, |current, total, dependency| {
            self.progress_reporter
                .report_progress(current, total, Some(dependency.artifact_id()));
        });

        let total = dependencies.len();
        if collection.failures.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "✅ Resolved licenses for {} dependency(ies)",
                total
            ));
        } else {
            for failure in &collection.failures {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", failure));
            }
            self.progress_reporter.report_completion(&format!(
                "✅ Resolved licenses for {} dependency(ies), {} lookup(s) failed",
                total,
                collection.failures.len()
            ));
        }

        collection
    }

    /// Request values win over the manifest's own package facts
    fn apply_request_overrides(
        mut project: ProjectDescriptor,
        request: &ReportRequest,
    ) -> ProjectDescriptor {
        if request.originator.is_some() {
            project = project.with_originator(request.originator.clone());
        }
        if request.download_location.is_some() {
            project = project.with_download_location(request.download_location.clone());
        }
        if request.copyright_text.is_some() {
            project = project.with_copyright_text(request.copyright_text.clone());
        }
        project
    }
}
