//! Build command implementation.
//!
//! Reads a CSV deck, renders every card and writes one PNG per page of
//! nine.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::config::Overrides;
use crate::deck::load_deck;
use crate::error::{CardError, Result};
use crate::font::FontCache;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{BatchReport, FailurePolicy, Pipeline};
use crate::render::{
    page_file_name, write_manifest, write_png, CardRenderer, GridComposer, ManifestMeta,
    ManifestPage,
};

use super::StyleArgs;

/// Render a CSV deck into 3x3 card grids
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// CSV file with title, cost, type, ability, atk and image_path columns
    pub deck: PathBuf,

    /// Output directory (default: dist)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Page file prefix (default: card_grid)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Stop at the first card that fails to render
    #[arg(long)]
    pub strict: bool,

    /// Also write <prefix>.json describing every page
    #[arg(long)]
    pub manifest: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    build(&args, printer).map(|_| ())
}

/// Run a build and return what it produced.
pub fn build(args: &BuildArgs, printer: &Printer) -> Result<BatchReport> {
    let config = args.style.load_config(
        &args.deck,
        Overrides {
            output: args.output.clone(),
            prefix: args.prefix.clone(),
            strict: args.strict,
            manifest: args.manifest,
            ..Default::default()
        },
    )?;

    let theme = config.resolve_theme()?;
    let fonts = Arc::new(FontCache::from_candidates(&config.font_candidates()));
    printer.info("Font", &fonts.source().describe());

    let records = load_deck(&args.deck)?;
    printer.status(
        "Loading",
        &format!(
            "{} from {}",
            plural(records.len(), "card", "cards"),
            display_path(&args.deck)
        ),
    );

    if !config.output.exists() {
        fs::create_dir_all(&config.output).map_err(|e| CardError::Io {
            path: config.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let composer = GridComposer::from_theme(&theme);
    let renderer = CardRenderer::new(theme, fonts)?;
    let policy = if config.strict {
        FailurePolicy::Strict
    } else {
        FailurePolicy::Isolate
    };
    let pipeline = Pipeline::new(&renderer, &composer).with_policy(policy);

    let mut written: Vec<ManifestPage> = Vec::new();
    let report = pipeline.run(&records, |number, page| {
        let file = page_file_name(&config.prefix, number);
        let path = config.output.join(&file);
        write_png(&page, &path)?;
        printer.status(
            "Writing",
            &format!(
                "{} ({})",
                display_path(&path),
                plural(page.card_count(), "card", "cards")
            ),
        );
        written.push(ManifestPage::new(file, &page));
        Ok(())
    })?;

    for failure in &report.failures {
        printer.warning(
            "Skipped",
            &format!("line {} '{}': {}", failure.line, failure.title, failure.reason),
        );
    }

    if config.manifest {
        let path = config.output.join(format!("{}.json", config.prefix));
        let meta = ManifestMeta {
            theme: renderer.theme().name.clone(),
            page_size: (composer.page().width, composer.page().height),
            card_size: renderer.card_size(),
        };
        write_manifest(&written, &meta, &path)?;
        printer.status("Writing", &display_path(&path));
    }

    printer.status(
        "Finished",
        &format!(
            "Created {} of cards in {}",
            plural(report.pages, "grid", "grids"),
            display_path(&config.output)
        ),
    );

    Ok(report)
}
