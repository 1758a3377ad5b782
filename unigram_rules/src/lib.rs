//! Rule base tokenizers and filters for the unigram tagger.

pub mod string_filters;
pub mod tokenizers;

/// Filter that processes a string and returns a new one.
pub trait StringFilter<S>
where
    S: AsRef<str>,
{
    /// Filters the given string.
    ///
    /// # Arguments:
    ///
    /// * `string` - Input string.
    ///
    /// # Returns
    ///
    /// A processed string.
    fn filter(&self, string: S) -> String;
}
