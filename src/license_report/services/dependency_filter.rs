use crate::license_report::domain::DependencyRef;
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Scopes included when none are configured
pub const DEFAULT_SCOPES: &str = "compile,runtime";

/// Maximum number of exclusion prefixes to prevent DoS attacks
const MAX_EXCLUDE_PREFIXES: usize = 64;

/// Maximum length of a single exclusion prefix
const MAX_PREFIX_LENGTH: usize = 255;

/// Why a dependency was kept or dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Included,
    OutOfScope,
    /// Indices of every exclusion prefix that matched the group id
    Excluded(Vec<usize>),
}

/// Classifies one dependency against the selected scopes and prefixes.
///
/// `included_scopes` must already be lower-case. The effective scope of a
/// dependency is its lower-cased scope, or `runtime` when none is declared.
/// Exclusion is a case-sensitive `starts_with` on the group id, so
/// `com.example` excludes `com.example.sub` and also `com.example2`.
/// Prefixes are only tested for dependencies that are in scope.
pub fn classify(
    dependency: &DependencyRef,
    included_scopes: &BTreeSet<String>,
    exclusion_prefixes: &[String],
) -> FilterDecision {
    if !included_scopes.contains(&dependency.effective_scope()) {
        return FilterDecision::OutOfScope;
    }

    let matched: Vec<usize> = exclusion_prefixes
        .iter()
        .enumerate()
        .filter(|(_, prefix)| dependency.group_id().starts_with(prefix.as_str()))
        .map(|(index, _)| index)
        .collect();

    if matched.is_empty() {
        FilterDecision::Included
    } else {
        FilterDecision::Excluded(matched)
    }
}

/// Pure inclusion test for one dependency, see [`classify`].
pub fn is_included(
    dependency: &DependencyRef,
    included_scopes: &BTreeSet<String>,
    exclusion_prefixes: &[String],
) -> bool {
    classify(dependency, included_scopes, exclusion_prefixes) == FilterDecision::Included
}

/// Parses a comma separated scope list: entries are trimmed and lower-cased,
/// empty entries dropped.
pub fn parse_scopes(scopes: &str) -> BTreeSet<String> {
    scopes
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// DependencyFilter - selects the dependencies a report covers
///
/// Keeps track of which exclusion prefixes removed at least one dependency so
/// that ineffective prefixes can be reported after filtering.
#[derive(Debug)]
pub struct DependencyFilter {
    scopes: BTreeSet<String>,
    prefixes: Vec<String>,
    matched: RefCell<Vec<bool>>,
}

impl DependencyFilter {
    /// # Errors
    /// - Too many prefixes (> MAX_EXCLUDE_PREFIXES)
    /// - An empty, overlong or invalid prefix
    /// - A scope list that names no scope at all
    pub fn new(scopes: &str, exclusion_prefixes: Vec<String>) -> Result<Self> {
        let scopes = parse_scopes(scopes);
        if scopes.is_empty() {
            anyhow::bail!("Scope list cannot be empty (default: \"{}\")", DEFAULT_SCOPES);
        }

        if exclusion_prefixes.len() > MAX_EXCLUDE_PREFIXES {
            anyhow::bail!(
                "Too many exclusion prefixes: {} (maximum: {})",
                exclusion_prefixes.len(),
                MAX_EXCLUDE_PREFIXES
            );
        }

        for prefix in &exclusion_prefixes {
            validate_prefix(prefix)?;
        }

        Ok(Self {
            scopes,
            matched: RefCell::new(vec![false; exclusion_prefixes.len()]),
            prefixes: exclusion_prefixes,
        })
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    /// Same decision as [`is_included`], recording which prefixes matched.
    pub fn includes(&self, dependency: &DependencyRef) -> bool {
        match classify(dependency, &self.scopes, &self.prefixes) {
            FilterDecision::Included => true,
            FilterDecision::OutOfScope => false,
            FilterDecision::Excluded(indices) => {
                let mut matched = self.matched.borrow_mut();
                for index in indices {
                    matched[index] = true;
                }
                false
            }
        }
    }

    /// Keeps the included dependencies, preserving input order.
    pub fn filter(&self, dependencies: Vec<DependencyRef>) -> Vec<DependencyRef> {
        dependencies
            .into_iter()
            .filter(|dep| self.includes(dep))
            .collect()
    }

    /// Prefixes that have not excluded any dependency so far
    pub fn unmatched_prefixes(&self) -> Vec<String> {
        let matched = self.matched.borrow();
        self.prefixes
            .iter()
            .zip(matched.iter())
            .filter(|(_, matched)| !**matched)
            .map(|(prefix, _)| prefix.clone())
            .collect()
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        anyhow::bail!("Exclusion prefix cannot be empty");
    }

    if prefix.len() > MAX_PREFIX_LENGTH {
        anyhow::bail!(
            "Exclusion prefix is too long: {} chars. Maximum: {} chars",
            prefix.len(),
            MAX_PREFIX_LENGTH
        );
    }

    if let Some(ch) = prefix
        .chars()
        .find(|c| !(c.is_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        anyhow::bail!(
            "Exclusion prefix contains invalid character '{}' in '{}'. \
             Only alphanumeric, hyphens, underscores and dots are allowed.",
            ch,
            prefix
        );
    }

    Ok(())
}
