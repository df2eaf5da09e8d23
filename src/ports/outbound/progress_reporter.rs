/// ProgressReporter port for user-facing progress output
///
/// Separate from `tracing` diagnostics: these messages are meant for the
/// person running the tool and are written to stderr so that a report sent
/// to stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a list of items
    ///
    /// # Arguments
    /// * `current` - Items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional label for the current item
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem
    fn report_error(&self, message: &str);

    /// Reports that an operation finished
    fn report_completion(&self, message: &str);
}
