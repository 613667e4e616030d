//! Search-as-you-type suggestions for a single query.

use anyhow::Result;
use pricepal_search::{RequestSequencer, RequestView};

use super::SuggestArgs;
use crate::context::Context;

/// Run the suggest command.
pub async fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let session = ctx.config.session()?;

    let view = if args.popular {
        let items = session
            .suggestion_service()
            .suggest(&args.query, true)
            .await;
        let ticket = RequestSequencer::new().issue();
        let mut view = RequestView::default();
        view.begin(ticket, &args.query);
        view.finish(ticket, Ok(items));
        view
    } else {
        let spinner = ctx.output.spinner("Looking up suggestions...");
        let view = session.suggest(&args.query).await;
        spinner.finish_and_clear();
        view
    };

    ctx.output.suggestions(&view);
    Ok(())
}
