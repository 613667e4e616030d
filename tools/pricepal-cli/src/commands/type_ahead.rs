//! Replays typing through the debounced suggestion pipeline.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::mpsc;

use super::TypeArgs;
use crate::context::Context;
use crate::output::state_badge;

/// Run the type command.
pub async fn run(args: TypeArgs, ctx: &Context) -> Result<()> {
    if args.text.is_empty() {
        bail!("Nothing to type");
    }

    let session = Arc::new(ctx.config.session()?);
    let delay = args
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| ctx.config.debounce());
    let interval = Duration::from_millis(args.interval_ms);

    ctx.output.header(&format!("Typing \"{}\"", args.text));
    ctx.output.kv("debounce", &format!("{}ms", delay.as_millis()));
    ctx.output.kv("interval", &format!("{}ms", interval.as_millis()));

    let mut changes = session.subscribe_suggestions();
    let output = ctx.output.clone();
    let watcher = tokio::spawn(async move {
        let mut updates = 0usize;
        while changes.changed().await.is_ok() {
            let view = changes.borrow_and_update().clone();
            updates += 1;
            output.debug(&format!(
                "suggestions {} \"{}\" ({} item(s))",
                state_badge(&view.state),
                view.query,
                view.items.len()
            ));
        }
        updates
    });

    let (tx, rx) = mpsc::unbounded_channel();
    let driver = session.drive_input(rx, delay);

    let mut typed = String::new();
    for ch in args.text.chars() {
        typed.push(ch);
        if tx.send(typed.clone()).is_err() {
            break;
        }
        tokio::time::sleep(interval).await;
    }
    drop(tx);
    driver.await?;

    ctx.output.suggestions(&session.suggestions());

    if !args.no_submit {
        let spinner = ctx.output.spinner(&format!("Comparing prices for \"{}\"...", args.text));
        let results = session.submit(&args.text).await;
        spinner.finish_and_clear();
        ctx.output.results(&results);
    }

    drop(session);
    let updates = watcher.await?;
    ctx.output.info(&format!(
        "{} keystroke(s), {} suggestion update(s)",
        args.text.chars().count(),
        updates
    ));

    Ok(())
}
