use crate::StringFilter;

/// Lowercasing filter, so that a capitalized sentence-initial word shares
/// statistics with its lowercase form.
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Creates a new LowercaseFilter.
    ///
    /// # Returns
    ///
    /// A new LowercaseFilter.
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for LowercaseFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StringFilter<S> for LowercaseFilter
where
    S: AsRef<str>,
{
    /// Replaces uppercase characters with their lowercase counterparts.
    ///
    /// # Arguments:
    ///
    /// * `string` - Input string.
    ///
    /// # Returns
    ///
    /// A processed string.
    fn filter(&self, string: S) -> String {
        string.as_ref().to_lowercase()
    }
}
