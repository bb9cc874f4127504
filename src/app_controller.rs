use anyhow::Result;
use log::{info, debug};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::context::RunContext;
use crate::file_utils::FileManager;
use crate::shift::{self, ShiftDuration};
use crate::subtitle_processor::CaptionSequence;

// @module: Application controller for subtitle resync

/// Main application controller: resolve shift, read, parse, shift, render, write
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Where the shifted subtitles will be written
    pub fn output_path(&self) -> PathBuf {
        FileManager::resync_output_path(&self.config.input_file, &self.config.output_suffix)
    }

    /// Run the whole resync and return the path of the written file.
    ///
    /// The shift expression is resolved first so that a bad expression aborts
    /// before the filesystem is touched.
    pub fn run(&self) -> Result<PathBuf> {
        let start_time = std::time::Instant::now();

        let shift = ShiftDuration::parse(&self.config.shift)?;

        info!("Processing {}", self.config.input_file.display());
        let content = FileManager::read_to_string(&self.config.input_file)?;

        info!("Shifting by: {}", shift);
        let rendered = Self::resync_content(&content, &shift);

        let output_path = self.output_path();
        FileManager::write_to_file(&output_path, &rendered)?;

        debug!("Resync finished in {:?}", start_time.elapsed());
        info!("Result has been saved as {}", output_path.display());

        Ok(output_path)
    }

    /// In-memory pipeline: parse, shift and render SRT content with a fresh run context
    pub fn resync_content(content: &str, shift: &ShiftDuration) -> String {
        let ctx = RunContext::new();
        let mut sequence = CaptionSequence::parse_srt_string(content, &ctx);
        shift::apply_shift(&mut sequence, shift, &ctx);
        sequence.render_srt()
    }
}
