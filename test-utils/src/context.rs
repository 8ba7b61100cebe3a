use std::path::PathBuf;
use tempfile::TempDir;

/// Test context owning an isolated temporary directory.
///
/// The directory and everything written into it is removed when the context is
/// dropped, so each test works against its own settings file.
pub struct TestContext {
    /// Temporary directory backing this test.
    pub dir: TempDir,

    /// Location of the settings file inside `dir`.
    ///
    /// The file only exists when the builder was given settings contents; otherwise
    /// the path points at a file that has not been created yet.
    pub settings_path: PathBuf,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with `settings_path` set to `<dir>/settings.json`
    /// - `Err(std::io::Error)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let dir = tempfile::tempdir()?;
        let settings_path = dir.path().join("settings.json");

        Ok(Self { dir, settings_path })
    }

    /// Reads back the raw contents of the settings file.
    pub fn read_settings_file(&self) -> Result<String, std::io::Error> {
        std::fs::read_to_string(&self.settings_path)
    }

    /// Returns a path inside a directory that does not exist, so any write fails.
    pub fn unwritable_path(&self) -> PathBuf {
        self.dir.path().join("missing").join("settings.json")
    }
}
