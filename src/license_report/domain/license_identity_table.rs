use std::collections::HashMap;

/// Key of one identity table entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LicenseIdentity {
    /// Canonical license url
    Url(String),
    /// A license published without url; each one is its own identity
    Anonymous(usize),
}

/// One deduplicated license in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    identity: LicenseIdentity,
    name: String,
}

impl LicenseEntry {
    pub fn identity(&self) -> &LicenseIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        match &self.identity {
            LicenseIdentity::Url(url) => Some(url),
            LicenseIdentity::Anonymous(_) => None,
        }
    }
}

/// Deduplicates licenses across dependencies by canonical url.
///
/// The first name recorded for a url wins; later names for the same url are
/// ignored. Licenses without url are never merged. Entries keep insertion
/// order, which is the order they appear in the generated document.
#[derive(Debug, Clone, Default)]
pub struct LicenseIdentityTable {
    entries: Vec<LicenseEntry>,
    index: HashMap<String, usize>,
    anonymous: usize,
}

impl LicenseIdentityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a license and returns the name to display for it.
    pub fn get_or_insert(&mut self, url: Option<&str>, name: &str) -> &str {
        let url = url.filter(|u| !u.trim().is_empty());

        let position = match url {
            Some(url) => match self.index.get(url) {
                Some(&position) => position,
                None => {
                    self.entries.push(LicenseEntry {
                        identity: LicenseIdentity::Url(url.to_string()),
                        name: name.to_string(),
                    });
                    let position = self.entries.len() - 1;
                    self.index.insert(url.to_string(), position);
                    position
                }
            },
            None => {
                self.entries.push(LicenseEntry {
                    identity: LicenseIdentity::Anonymous(self.anonymous),
                    name: name.to_string(),
                });
                self.anonymous += 1;
                self.entries.len() - 1
            }
        };

        &self.entries[position].name
    }

    pub fn entries(&self) -> &[LicenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
