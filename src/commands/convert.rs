//! Convert command handler.
//!
//! One-shot conversion of files or stdin, parallel batch conversion into an
//! output directory, and line-by-line streaming of stdin.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use tracing::debug;

use ansihtml::cli::ConvertArgs;
use ansihtml::html::{render_page, PageOptions};
use ansihtml::{AnsiFilter, Config, FilterOptions};

use super::{ensure_stdin_is_piped, resolve_filter_options, write_output};

/// Convert a whole input with a fresh filter, optionally as a full page.
pub fn convert_text(input: &str, options: &FilterOptions, page: Option<&PageOptions>) -> String {
    let body = AnsiFilter::new(options.clone()).to_html(input);
    match page {
        Some(page) => render_page(page, &body),
        None => body,
    }
}

/// Read a file as text, replacing invalid UTF-8.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Output path for `input` inside `dir`: same stem, `.html` extension.
pub fn output_path_for(dir: &Path, input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".html");
    dir.join(name)
}

fn page_options(config: &Config, args: &ConvertArgs, options: &FilterOptions) -> PageOptions {
    let mut page = config.page_options();
    page.foreground = options.foreground.clone();
    page.background = options.background.clone();
    if let Some(title) = &args.title {
        page.title = title.clone();
    }
    page
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &ConvertArgs) -> Result<()> {
    let options = resolve_filter_options(config, &args.style)?;
    let page = args.page.then(|| page_options(config, args, &options));

    if args.stream {
        ensure_stdin_is_piped()?;
        let stdin = io::stdin();
        return match &args.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {:?}", path))?;
                stream(stdin.lock(), BufWriter::new(file), &options)
            }
            None => stream(stdin.lock(), io::stdout().lock(), &options),
        };
    }

    if let Some(dir) = &args.output_dir {
        if args.files.is_empty() {
            bail!("--output-dir needs at least one input file");
        }
        return convert_batch(&args.files, dir, &options, page.as_ref());
    }

    let output = if args.files.is_empty() {
        ensure_stdin_is_piped()?;
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        convert_text(&input, &options, page.as_ref())
    } else {
        // Each file is converted independently and the fragments joined
        let mut body = String::new();
        for file in &args.files {
            body.push_str(&convert_text(&read_input(file)?, &options, None));
        }
        match &page {
            Some(page) => render_page(page, &body),
            None => body,
        }
    };

    write_output(args.output.as_deref(), &output)
}

/// Convert every file into `dir` in parallel, one filter per file.
pub fn convert_batch(
    files: &[PathBuf],
    dir: &Path,
    options: &FilterOptions,
    page: Option<&PageOptions>,
) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {:?}", dir))?;

    let failures: Vec<String> = files
        .par_iter()
        .filter_map(|file| {
            let result = read_input(file).and_then(|input| {
                let target = output_path_for(dir, file);
                debug!(input = %file.display(), output = %target.display(), "Converting");
                let html = convert_text(&input, options, page);
                fs::write(&target, html)
                    .with_context(|| format!("Failed to write output file: {:?}", target))
            });
            result.err().map(|e| format!("{}: {:#}", file.display(), e))
        })
        .collect();

    if !failures.is_empty() {
        bail!("{} of {} files failed:\n{}", failures.len(), files.len(), failures.join("\n"));
    }
    eprintln!("Converted {} files into {}", files.len(), dir.display());
    Ok(())
}

/// Convert `input` line by line, flushing HTML after every line.
///
/// Tags left open at end of input are closed before returning.
pub fn stream<R: BufRead, W: Write>(mut input: R, mut output: W, options: &FilterOptions) -> Result<()> {
    let mut filter = AnsiFilter::new(options.clone());
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        output.write_all(filter.add_input(&line).as_bytes())?;
        output.flush()?;
    }
    output.write_all(filter.teardown_html().as_bytes())?;
    output.flush()?;
    Ok(())
}
