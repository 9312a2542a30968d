/// ProgressReporter port for reporting progress to the user
///
/// This port abstracts user-facing progress output (e.g., stderr) so the
/// dashboard core never writes to the terminal directly.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Signals that a long-running activity (e.g., a network round trip) started
    ///
    /// Adapters may show a spinner until `end_activity` is called.
    fn begin_activity(&self, message: &str) {
        self.report(message);
    }

    /// Signals that the current long-running activity finished
    fn end_activity(&self) {}
}
