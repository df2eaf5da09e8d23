/// One line of the dependency/license summary: a component and its license names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRow {
    display_name: String,
    license_names: String,
}

impl DependencyRow {
    pub fn new(display_name: impl Into<String>, license_names: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            license_names: license_names.into(),
        }
    }

    /// Builds a row from raw license names, joined with `", "` in the given order.
    pub fn from_names<I, S>(display_name: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = names
            .into_iter()
            .map(|n| n.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(display_name, joined)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Empty when the dependency could not be resolved
    pub fn license_names(&self) -> &str {
        &self.license_names
    }
}
