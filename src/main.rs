//! mdpimg - Resolve (and download) mdpr.jp article galleries

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unreachable_pub,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::clone_on_ref_ptr,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::panic,
    clippy::pattern_type_mismatch,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads,
    clippy::dbg_macro,
    clippy::let_underscore_must_use,
    clippy::todo,
    clippy::unwrap_used,
    clippy::use_debug
)]
#![allow(
    // The 90’s called and wanted their charset back :p
    clippy::non_ascii_literal,
)]

// }}}

use clap::{ArgAction, Parser};
use eyre::{ensure, Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use mdpimg::{fs, termio, Scraper};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logger(opts.verbose);

    let scraper = Scraper::new();

    // One broken article shouldn't prevent the others from being processed.
    let mut failures = 0_usize;
    for url in &opts.urls {
        let res = match opts.output {
            Some(ref output) => download_gallery(&scraper, url, output),
            None => print_gallery(&scraper, url),
        };

        if let Err(err) = res {
            termio::print_err(&format!("{url}: {err:#}"));
            failures += 1;
        }
    }

    ensure!(
        failures == 0,
        "{failures}/{} article(s) failed",
        opts.urls.len()
    );

    Ok(())
}

/// Prints the image URLs of an article, one per line.
fn print_gallery(scraper: &Scraper, url: &str) -> Result<()> {
    let images = scraper.get_images(url).context("get gallery images")?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for image in images {
        writeln!(stdout, "{image}").context("write image URL")?;
    }

    Ok(())
}

/// Downloads the images of an article in its own directory under `output`.
fn download_gallery(scraper: &Scraper, url: &str, output: &Path) -> Result<()> {
    let article = scraper.check(url)?;
    let id = article.id();

    let api_url = scraper
        .resolve_endpoint(&article)
        .context("resolve gallery endpoint")?;
    let images = scraper
        .list_images(&api_url)
        .context("list gallery images")?;
    if images.is_empty() {
        termio::print_warn(&format!("article {id}: empty gallery"));
        return Ok(());
    }

    // Create output directory, if necessary.
    let destination = output.join(fs::sanitize_name(id.as_str()));
    fs::mkdir_p(&destination).context("create article directory")?;

    // Setup the progress bar.
    println!("Downloading article {id}");
    let progress_bar = ProgressBar::new(images.len() as u64);
    setup_progress_bar(&progress_bar);

    let profile = scraper.site().api_profile;
    let mut buf = Vec::new();
    let mut skipped = 0_usize;
    for (i, image) in images.iter().enumerate() {
        let path = destination.join(fs::image_filename(i, image));

        // Already there (previous run): nothing to do.
        if path.is_file() {
            skipped += 1;
            progress_bar.inc(1);
            continue;
        }

        buf.clear();
        scraper
            .fetcher()
            .get_image(image, &profile, &mut buf)
            .with_context(|| format!("download {image}"))?;
        fs::atomic_write(&path, &buf)
            .with_context(|| format!("save {image}"))?;

        progress_bar.inc(1);
    }

    progress_bar.finish();

    termio::print_ok(&format!(
        "article {id}: {} image(s) in {} ({skipped} already present)",
        images.len(),
        destination.display()
    ));

    Ok(())
}

/// Configures the progress bar for the images.
fn setup_progress_bar(progress_bar: &ProgressBar) {
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:10}    [{bar:40.cyan/blue}] {pos:>4}/{len:4} ETA: {eta_precise}")
            .progress_chars("##-"),
    );
    progress_bar.set_message("images");
}

/// Initializes the logger: `RUST_LOG` applies, `-v` raises our own level.
fn init_logger(verbosity: u8) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );

    let level = match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_module("mdpimg", level);
    }
    // The HTML parser is very chatty about sloppy markup.
    builder.filter_module("html5ever", LevelFilter::Error);

    builder.init();
}

/// CLI options.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Opts {
    /// Article URLs (e.g. https://mdpr.jp/news/detail/12345).
    #[clap(required = true, value_parser)]
    urls: Vec<String>,

    /// Download the images in this directory, instead of printing their URL.
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Increase logging verbosity (repeatable).
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}
