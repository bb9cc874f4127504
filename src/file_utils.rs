use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and path utilities

/// Suffix inserted before the extension of the output file
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-resync";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @generates: Output path next to the input, suffix before the extension
    // @params: input_file, suffix
    pub fn resync_output_path<P: AsRef<Path>>(input_file: P, suffix: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let file_name = input_file.file_name().unwrap_or_default().to_string_lossy();

        // Extension starts at the last dot of the file name, even a leading one
        let (stem, extension) = match file_name.rfind('.') {
            Some(dot) => file_name.split_at(dot),
            None => (&*file_name, ""),
        };

        input_file.with_file_name(format!("{}{}{}", stem, suffix, extension))
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Error opening subtitle file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        fs::write(&path, content)
            .with_context(|| format!("Error creating new subtitle file: {:?}", path.as_ref()))
    }
}
