//! One-shot product search.

use std::fs;

use anyhow::{bail, Context as _, Result};
use pricepal_render::{render_page, PageModel};
use pricepal_search::RequestState;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    if args.query.trim().is_empty() {
        bail!("Search query is empty");
    }

    let session = ctx.config.session()?;
    ctx.output.debug(&format!("API: {}", ctx.config.api.base_url));

    let spinner = ctx.output.spinner(&format!("Comparing prices for \"{}\"...", args.query));
    let results = session.submit(&args.query).await;
    let suggestions = if args.with_suggestions {
        Some(session.suggest(&args.query).await)
    } else {
        None
    };
    spinner.finish_and_clear();

    if let Some(path) = &args.html {
        let mut model = PageModel::for_results(&results);
        if let Some(view) = &suggestions {
            model = model.with_suggestions(view);
        }
        let path = ctx.resolve_path(path);
        fs::write(&path, render_page(&model))
            .with_context(|| format!("Failed to write page: {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if let RequestState::Failed { reason } = &results.state {
        bail!("Unable to load results for \"{}\": {}", results.query, reason);
    }

    ctx.output.results(&results);
    if !ctx.output.is_json() && !results.items.is_empty() {
        ctx.output.info(&format!("{} product(s)", results.items.len()));
    }

    Ok(())
}
