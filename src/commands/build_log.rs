//! Build-log command handler

use anyhow::{Context, Result};

use ansihtml::buildlog::{BuildLogView, LogDump};
use ansihtml::cli::BuildLogArgs;
use ansihtml::html::render_page;
use ansihtml::{Config, FilterOptions};

use super::{resolve_filter_options, write_output};

/// Apply every page of a dump to a fresh view.
pub fn build_view(dump: LogDump, options: FilterOptions) -> Result<BuildLogView> {
    let mut view = BuildLogView::new(options);
    for (n, page) in dump.into_pages().into_iter().enumerate() {
        view.ingest(page)
            .with_context(|| format!("Failed to apply log page {}", n + 1))?;
    }
    Ok(view)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, args: &BuildLogArgs) -> Result<()> {
    let options = resolve_filter_options(config, &args.style)?;
    let dump = LogDump::load(&args.file)?;
    let view = build_view(dump, options.clone())?;

    let body = view.render_html();
    let output = if args.fragment {
        body
    } else {
        let mut page = config.page_options();
        page.foreground = options.foreground.clone();
        page.background = options.background.clone();
        if let Some(title) = args.title.clone().or_else(|| view.title()) {
            page.title = title;
        }
        render_page(&page, &body)
    };

    write_output(args.output.as_deref(), &output)
}
