//! spdx-license-report - license compliance reporting for declared dependencies
//!
//! This library resolves the licenses of a project's declared dependencies
//! and assembles an SPDX 1.2 package document, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use spdx_license_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let manifest_reader = FileSystemReader::new();
//! let resolver = CachingProjectResolver::new(LocalIndexResolver::new(
//!     PathBuf::from("license-index"),
//! ));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(manifest_reader, resolver, progress_reporter);
//!
//! // Execute
//! let request = ReportRequest::builder().project_path(".").build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = RdfFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryWriter, FileSystemReader, StdoutWriter,
    };
    pub use crate::adapters::outbound::formatters::{MarkdownFormatter, RdfFormatter};
    pub use crate::adapters::outbound::repository::{
        CachingProjectResolver, HttpRegistryResolver, LocalIndexResolver,
    };
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::license_report::domain::{
        ArtifactCoordinate, ArtifactVersion, DependencyRef, DependencyRow, LicenseIdentityTable,
        LicenseInfo, LicenseOverride, PackageDocument, ProjectDescriptor, ProjectMetadata,
        ResolutionFailure, ResolutionStage, UserLicense,
    };
    pub use crate::license_report::policies::LicenseOverridePolicy;
    pub use crate::license_report::services::{
        DependencyFilter, DocumentAssembler, LicenseCollector,
    };
    pub use crate::ports::outbound::{
        DocumentFormatter, ManifestReader, ProgressReporter, ProjectManifest, ProjectResolver,
        ReportWriter,
    };
    pub use crate::shared::Result;
}
