//! Command-line interface for batch rendering and offline sampling

use crate::inference::sampler::SeededSampler;
use crate::io::configuration::{
    CARD_RECORD_SUFFIX, CARD_SUFFIX, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, PATTERN_SUFFIX,
    REQUEST_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_target, io_error};
use crate::io::progress::ProgressManager;
use crate::io::request::RenderRequest;
use crate::model::result::CardResult;
use crate::pipeline::{Generator, compose_card, render_pattern};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "patterncard")]
#[command(
    author,
    version,
    about = "Render generative SVG patterns and compose invitation cards over them"
)]
/// Command-line arguments for the card generator
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Operations offered by the command-line tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render request files into pattern documents and optional cards
    Render {
        /// Request JSON file or directory of request files
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Also compose a card and write its record
        #[arg(short, long)]
        card: bool,

        /// Process requests even if their output exists
        #[arg(short, long)]
        no_skip: bool,
    },
    /// Run the prompt pipeline offline with a seeded sampler
    Sample {
        /// Free-text description of the card
        #[arg(short, long)]
        prompt: String,

        /// Seed of the first card; later cards use consecutive seeds
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Number of cards to produce
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,

        /// Directory receiving the cards
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Output file next to `input` with `suffix` replacing its extension
///
/// # Errors
///
/// Returns an error if `input` has no file name
pub fn output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| io_error("request path has no file name"))?;
    let name = format!("{}{suffix}", stem.to_string_lossy());
    Ok(input
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name)))
}

/// Whether `path` looks like a request file rather than a generated record
pub fn is_request_file(path: &Path) -> bool {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some(REQUEST_EXTENSION);
    let is_record = path
        .file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.ends_with(CARD_RECORD_SUFFIX));
    is_json && !is_record
}

fn write_card(result: &CardResult, svg_path: &Path, record_path: &Path) -> Result<()> {
    fs::write(svg_path, &result.card_svg).with_path(svg_path, "write")?;
    fs::write(record_path, result.to_json()?).with_path(record_path, "write")
}

/// Runs the selected command with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor for parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or any output cannot be written
    pub fn process(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Render {
                target,
                card,
                no_skip,
            } => self.render(&target, card, no_skip),
            Command::Sample {
                prompt,
                seed,
                count,
                out,
            } => Self::sample(&prompt, seed, count, &out),
        }
    }

    fn render(&mut self, target: &Path, card: bool, no_skip: bool) -> Result<()> {
        let files = Self::collect_files(target)?
            .into_iter()
            .filter(|file| no_skip || Self::needs_output(file, card))
            .collect::<Vec<_>>();

        if files.is_empty() {
            info!(path = %target.display(), "nothing to render");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.render_file(file, index, card)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(())
    }

    /// Request files named by the target, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a request file nor a directory
    pub fn collect_files(target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if is_request_file(target) {
                Ok(vec![target.to_path_buf()])
            } else {
                Err(invalid_target(target, &"file must be a .json render request"))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file() && is_request_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(target, &"must be a request file or directory"))
        }
    }

    fn needs_output(input: &Path, card: bool) -> bool {
        let mut suffixes = vec![PATTERN_SUFFIX];
        if card {
            suffixes.extend([CARD_SUFFIX, CARD_RECORD_SUFFIX]);
        }
        let missing = suffixes
            .iter()
            .any(|suffix| !output_path(input, suffix).is_ok_and(|path| path.exists()));
        if !missing {
            info!(input = %input.display(), "skipping, output exists");
        }
        missing
    }

    fn render_file(&mut self, input: &Path, index: usize, card: bool) -> Result<()> {
        let start_time = Instant::now();
        let stages = if card { 3 } else { 1 };
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_request(index, input, stages);
        }

        let request = RenderRequest::load(input)?;
        if let Err(error) = request.validate() {
            warn!(
                input = %input.display(),
                %error,
                "request outside documented ranges, rendering anyway"
            );
        }

        let pattern_path = output_path(input, PATTERN_SUFFIX)?;
        let artifact = render_pattern(&request.pattern);
        fs::write(&pattern_path, &artifact.svg_string).with_path(&pattern_path, "write")?;
        self.advance(index);

        if card {
            let result = compose_card(&request.pattern, request.content_or_default());
            let card_path = output_path(input, CARD_SUFFIX)?;
            let record_path = output_path(input, CARD_RECORD_SUFFIX)?;
            write_card(&result, &card_path, &record_path)?;
            self.advance(index);
            self.advance(index);
        }

        info!(
            input = %input.display(),
            engine = %request.pattern.kind(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "request rendered"
        );
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_request(index, start_time.elapsed());
        }
        Ok(())
    }

    fn advance(&mut self, index: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(index);
        }
    }

    fn sample(prompt: &str, seed: u64, count: usize, out: &Path) -> Result<()> {
        fs::create_dir_all(out).with_path(out, "create directory")?;

        for offset in 0..count {
            let card_seed = seed.wrapping_add(offset as u64);
            let generator = Generator::new(SeededSampler::new(card_seed));
            let result = generator.generate_card(prompt);

            let base = out.join(format!("sample_{card_seed}"));
            let card_path = output_path(&base, CARD_SUFFIX)?;
            let record_path = output_path(&base, CARD_RECORD_SUFFIX)?;
            write_card(&result, &card_path, &record_path)?;
            info!(seed = card_seed, card = %card_path.display(), "sample written");
        }
        Ok(())
    }
}
