use super::coordinate::ArtifactCoordinate;
use std::fmt;

/// Which resolver call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStage {
    /// Listing available versions; the declared version is used instead
    VersionLookup,
    /// Building the project metadata; the dependency gets an empty license row
    ProjectBuild,
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStage::VersionLookup => write!(f, "version lookup"),
            ResolutionStage::ProjectBuild => write!(f, "project resolution"),
        }
    }
}

/// A recovered, per-dependency resolver failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFailure {
    coordinate: ArtifactCoordinate,
    stage: ResolutionStage,
    reason: String,
}

impl ResolutionFailure {
    pub fn new(coordinate: ArtifactCoordinate, stage: ResolutionStage, reason: String) -> Self {
        Self {
            coordinate,
            stage,
            reason,
        }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn stage(&self) -> ResolutionStage {
        self.stage
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for {}: {}",
            self.stage, self.coordinate, self.reason
        )
    }
}
