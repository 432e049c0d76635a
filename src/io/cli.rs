//! Command-line interface for ordering the patches of PNG files

use crate::io::configuration::{
    DEFAULT_MEASURE, DEFAULT_ORDERING, DEFAULT_PATCH_SIZE, INPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{CurriculumError, Result, invalid_parameter};
use crate::io::image::{export_png, load_png};
use crate::io::progress::ProgressManager;
use crate::measures::{Measure, MeasureRegistry, default_registry};
use crate::sequencing::{
    ChainStrategy, DistanceEvaluation, Ordering, Sequencer, SequencerConfig,
};
use crate::spatial::rebuild;
use crate::spatial::tiles::{crop_to_patch_multiple, extract_patches};
use clap::Parser;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "patch-curriculum")]
#[command(
    author,
    version,
    about = "Order image patches by an information measure and re-tile them"
)]
/// Command-line arguments for the patch ordering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET", required_unless_present = "list_measures")]
    pub target: Option<PathBuf>,

    /// Edge length in pixels of the square patches
    #[arg(short, long, default_value_t = DEFAULT_PATCH_SIZE)]
    pub patch_size: usize,

    /// Measure used to order the patches (see --list-measures)
    #[arg(short, long, default_value = DEFAULT_MEASURE)]
    pub measure: String,

    /// Direction of the resulting order
    #[arg(short, long, value_enum, default_value_t = DEFAULT_ORDERING)]
    pub ordering: Ordering,

    /// Chaining variant for distance measures
    #[arg(long, value_enum, default_value_t = ChainStrategy::LiveSwap)]
    pub strategy: ChainStrategy,

    /// Compute all pairwise distances before chaining
    #[arg(long)]
    pub precompute: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Log sequencing details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the available measures and exit
    #[arg(long)]
    pub list_measures: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sequencer settings selected on the command line
    pub const fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            chain: self.strategy,
            evaluation: if self.precompute {
                DistanceEvaluation::Precomputed
            } else {
                DistanceEvaluation::Streaming
            },
        }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, or info-level
/// events when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber installed earlier (e.g. by a test harness) stays in place
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// One line per registered measure: identifier and kind
pub fn describe_measures(registry: &MeasureRegistry) -> String {
    let mut listing = String::new();
    for id in registry.ids() {
        if let Ok(measure) = registry.resolve(id) {
            let _ = writeln!(listing, "{id:<24}{}", measure.kind());
        }
    }
    listing
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the measure is unknown, the patch size is zero,
    /// target validation fails, or any file fails to load, sequence, or export
    pub fn process(&mut self) -> Result<()> {
        let measure = default_registry().resolve(&self.cli.measure)?;
        if self.cli.patch_size == 0 {
            return Err(invalid_parameter(
                "patch-size",
                &self.cli.patch_size,
                &"patch size must be at least 1",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &measure)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = self
            .cli
            .target
            .as_ref()
            .ok_or_else(|| invalid_parameter("target", &"", &"no target given"))?;

        if target.is_file() {
            if has_input_extension(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| CurriculumError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry?.path();
                if has_input_extension(&path)
                    && !is_curriculum_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, measure: &Measure) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);
        let patch_size = self.cli.patch_size;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let image = load_png(input_path)?;
        let cropped = crop_to_patch_multiple(image.view(), patch_size, patch_size);
        if cropped.dim() != image.dim() {
            warn!(
                input = %input_path.display(),
                from = ?image.dim(),
                to = ?cropped.dim(),
                "cropped image to a multiple of the patch size"
            );
        }
        let (image_h, image_w, _) = cropped.dim();
        let patches = extract_patches(cropped, patch_size, patch_size)?;

        let sequencer = Sequencer::new(self.cli.sequencer_config());
        let output = match self.progress_manager.as_mut() {
            Some(pm) => sequencer.run_observed(
                patches,
                None::<Vec<usize>>,
                measure,
                self.cli.ordering,
                &mut pm.observer(index),
            )?,
            None => sequencer.run(patches, None::<Vec<usize>>, measure, self.cli.ordering)?,
        };

        let rebuilt = rebuild(&output.patches, image_h, image_w)?;
        export_png(rebuilt.view(), &output_path)?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            patches = output.permutation.len(),
            "wrote curriculum image"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    /// Output path for an input file: `<stem>_curriculum.<ext>` beside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

// Earlier results in a scanned directory are not inputs
fn is_curriculum_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
