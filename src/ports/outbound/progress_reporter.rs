/// ProgressReporter port for reporting progress during a run
///
/// Progress messages are advisory; they never carry error information
/// the caller depends on.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports which view out of how many is being processed
    ///
    /// # Arguments
    /// * `current` - 1-based position of the view
    /// * `total` - Number of views in the run
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
