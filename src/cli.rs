//! CLI definitions for ansihtml
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Placeholder vergen emits when git information is unavailable.
const VERGEN_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Version string for `--version`, with the git SHA on dev builds.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let sha = option_env!("VERGEN_GIT_SHA").filter(|_| !cfg!(feature = "release"));
        format_version(env!("CARGO_PKG_VERSION"), sha)
    })
}

/// `version (sha)`, or just `version` when the SHA is missing or a placeholder.
fn format_version(version: &str, sha: Option<&str>) -> String {
    match sha {
        Some(sha) if !sha.is_empty() && sha != "unknown" && sha != VERGEN_PLACEHOLDER => {
            format!("{} ({})", version, sha)
        }
        _ => version.to_string(),
    }
}

#[derive(Parser)]
#[command(name = "ansihtml")]
#[command(about = "Convert ANSI-colored terminal output and build logs to HTML")]
#[command(
    long_about = "ansihtml - Convert ANSI-colored terminal output to HTML.

Reads text containing ANSI SGR escape sequences (colors, bold, underline)
and writes equivalent HTML using inline styles. Build logs in JSON form
are rendered section by section.

QUICK START:
    make 2>&1 | ansihtml convert --page > build.html
    ansihtml convert --stream < live.log      Convert as input arrives
    ansihtml build-log logs.json -o logs.html Render a build log dump
    ansihtml palette --css                    Print the 256-color table"
)]
#[command(version, long_version = long_version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Config file to use instead of ~/.config/ansihtml/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert ANSI text to HTML
    #[command(long_about = "Convert text with ANSI escape sequences to HTML.

Reads the given files, or stdin when none are given. Every input stream
gets its own filter, so colors never leak between files.

EXAMPLES:
    ansihtml convert out.log                   Fragment to stdout
    ansihtml convert out.log -o out.html --page
    ansihtml convert a.log b.log --output-dir html/
    tail -f build.log | ansihtml convert --stream")]
    Convert(ConvertArgs),

    /// Render a JSON build log dump to HTML
    #[command(
        name = "build-log",
        long_about = "Render a build log dump to HTML.

The file holds either one log page ({\"start\", \"total\", \"logs\"}), an
array of pages as returned by successive polls, or a bare array of
entries. Entries of type command, phase and error start new sections.

EXAMPLES:
    ansihtml build-log logs.json -o logs.html
    ansihtml build-log logs.json --fragment"
    )]
    BuildLog(BuildLogArgs),

    /// Print the 256-color style table
    Palette {
        /// Print CSS classes (.ef<n>, .eb<n>) instead of a table
        #[arg(long)]
        css: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    #[command(long_about = "Manage ansihtml configuration.

Configuration is stored in ~/.config/ansihtml/config.toml:

    [filter]
    foreground = \"#FFF\"
    background = \"#000\"
    newline = false
    escape_xml = true

    [filter.colors]
    1 = \"#F44\"

    [render]
    title = \"ansihtml\"
    font_family = \"monospace\"")]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Options shared by commands that convert text.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Convert newlines to <br/>
    #[arg(long)]
    pub newline: bool,

    /// Default foreground color (SGR 39)
    #[arg(long, value_name = "COLOR")]
    pub fg: Option<String>,

    /// Default background color (SGR 49)
    #[arg(long, value_name = "COLOR")]
    pub bg: Option<String>,

    /// Do not HTML-escape the text
    #[arg(long)]
    pub no_escape: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Input files (stdin when omitted)
    pub files: Vec<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(long, short, value_name = "FILE", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write one <name>.html per input file into this directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Wrap the result in a standalone HTML page
    #[arg(long)]
    pub page: bool,

    /// Page title (with --page)
    #[arg(long)]
    pub title: Option<String>,

    /// Convert stdin line by line, flushing after each line
    #[arg(long, conflicts_with_all = ["files", "page", "output_dir", "title"])]
    pub stream: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BuildLogArgs {
    /// JSON log dump
    pub file: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Page title (defaults to the first command or phase)
    #[arg(long)]
    pub title: Option<String>,

    /// Emit only the section markup, without the page wrapper
    #[arg(long)]
    pub fragment: bool,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path
    Path,
}
