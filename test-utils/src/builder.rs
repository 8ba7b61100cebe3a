use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with optional settings file contents.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_settings_file(fixture::settings::malformed())
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Contents written to the settings file during `build()`, if any.
    settings: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no settings file.
    pub fn new() -> Self {
        Self { settings: None }
    }

    /// Writes the given contents to the settings file when the context is built.
    ///
    /// # Arguments
    /// - `contents` - Raw file contents, not required to be valid JSON
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_settings_file(mut self, contents: impl Into<String>) -> Self {
        self.settings = Some(contents.into());
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the settings file written if configured
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(contents) = self.settings {
            std::fs::write(&context.settings_path, contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
