//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pricepal_catalog::product::Product;
use pricepal_catalog::suggestion::{Suggestion, SuggestionGroups};
use pricepal_render::match_ranges;
use pricepal_search::{RequestState, RequestView};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Create a spinner for a pending request.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Print a results view: grid, empty state or failure.
    pub fn results(&self, view: &RequestView<Product>) {
        if self.json {
            self.json(view);
            return;
        }

        match &view.state {
            RequestState::Idle => {}
            RequestState::Pending => self.info("Searching..."),
            RequestState::Failed { reason } => {
                self.error(&format!("Unable to load results for \"{}\": {}", view.query, reason))
            }
            RequestState::Succeeded if view.items.is_empty() => {
                self.info(&format!("No products found for \"{}\"", view.query))
            }
            RequestState::Succeeded => {
                self.header(&format!("Search Results for \"{}\"", view.query));
                for product in &view.items {
                    println!("{}", product_block(product));
                }
            }
        }
    }

    /// Print a suggestions view as grouped lists.
    pub fn suggestions(&self, view: &RequestView<Suggestion>) {
        if self.json {
            self.json(view);
            return;
        }

        if let RequestState::Failed { reason } = &view.state {
            self.warn(&format!("Suggestions unavailable: {}", reason));
        }
        let groups = SuggestionGroups::group(&view.items);
        if groups.is_empty() {
            if view.state == RequestState::Succeeded {
                self.info("No results found.");
            }
            return;
        }
        for (heading, items) in groups.sections() {
            println!("{}", style(heading).dim().bold());
            for suggestion in items {
                let text = if suggestion.popular {
                    suggestion.text.clone()
                } else {
                    emphasize(&suggestion.text, &view.query)
                };
                self.list_item(&text);
            }
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Multi-line terminal card for a product.
pub fn product_block(product: &Product) -> String {
    let mut lines = vec![format!(
        "  {}  {}",
        style(&product.title).bold(),
        style(product.price).green().bold()
    )];
    if let Some(d) = product.discount_percentage.filter(|_| product.has_discount()) {
        lines[0].push_str(&format!("  {}", style(format!("{}% off", d)).yellow()));
    }
    if let Some(summary) = &product.summary {
        lines.push(format!("    {}", style(summary).dim()));
    }
    lines.push(format!(
        "    {} {}",
        style(product.cta_label()).cyan(),
        style(&product.url).underlined()
    ));
    lines.join("\n")
}

/// Bold every case-insensitive occurrence of `query` in `text`.
pub fn emphasize(text: &str, query: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in match_ranges(text, query) {
        out.push_str(&text[last..range.start]);
        out.push_str(&style(&text[range.clone()]).yellow().bold().to_string());
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Coloured label for a request state.
pub fn state_badge(state: &RequestState) -> String {
    let label = state.label();
    match state {
        RequestState::Succeeded => style(label).green().to_string(),
        RequestState::Pending => style(label).yellow().to_string(),
        RequestState::Failed { .. } => style(label).red().to_string(),
        RequestState::Idle => style(label).dim().to_string(),
    }
}
