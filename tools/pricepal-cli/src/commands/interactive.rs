//! Prompt-driven storefront: type, pick a suggestion, compare prices.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use pricepal_catalog::suggestion::Suggestion;

use super::InteractiveArgs;
use crate::context::Context;

/// Run the interactive command.
pub async fn run(args: InteractiveArgs, ctx: &Context) -> Result<()> {
    let session = ctx.config.session()?;
    let mut next = args.query;

    loop {
        let typed = match next.take() {
            Some(query) => query,
            None => Input::<String>::new()
                .with_prompt("Search")
                .allow_empty(true)
                .interact_text()?,
        };

        let suggestions = session.suggest(&typed).await;
        let choices = choices(&typed, &suggestions.items);
        let query = if choices.len() == 1 {
            choices[0].clone()
        } else {
            let selection = Select::new()
                .with_prompt("Pick a search")
                .items(&choices)
                .default(0)
                .interact()?;
            choices[selection].clone()
        };

        if query.trim().is_empty() {
            ctx.output.warn("Nothing to search for");
        } else {
            let spinner = ctx.output.spinner(&format!("Comparing prices for \"{}\"...", query));
            let results = session.submit(&query).await;
            spinner.finish_and_clear();
            ctx.output.results(&results);
        }

        let again = Confirm::new()
            .with_prompt("Search again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Menu entries: the typed text first, then distinct suggestion texts.
fn choices(typed: &str, suggestions: &[Suggestion]) -> Vec<String> {
    let mut choices = Vec::new();
    if !typed.trim().is_empty() {
        choices.push(typed.to_string());
    }
    for suggestion in suggestions {
        if !choices.iter().any(|c| c.eq_ignore_ascii_case(&suggestion.text)) {
            choices.push(suggestion.text.clone());
        }
    }
    if choices.is_empty() {
        choices.push(String::new());
    }
    choices
}
