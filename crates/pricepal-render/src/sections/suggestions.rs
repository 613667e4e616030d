//! Suggestions dropdown.

use pricepal_catalog::suggestion::{Suggestion, SuggestionGroups};
use pricepal_search::{RequestState, RequestView};

use crate::escape::{highlight, html_escape};

/// Render the dropdown for a suggestions view.
///
/// Idle renders nothing; pending renders skeleton lines; a settled view
/// with nothing in it renders "No results found.".
pub fn render_suggestions(view: &RequestView<Suggestion>) -> String {
    match &view.state {
        RequestState::Idle => String::new(),
        RequestState::Pending => render_suggestions_skeleton(),
        RequestState::Succeeded | RequestState::Failed { .. } => {
            render_suggestion_groups(&view.items, &view.query)
        }
    }
}

/// Render grouped suggestions, highlighting `query` in each entry.
pub fn render_suggestion_groups(suggestions: &[Suggestion], query: &str) -> String {
    let groups = SuggestionGroups::group(suggestions);
    if groups.is_empty() {
        return wrap(r#"<p class="suggestions-empty">No results found.</p>"#.to_string());
    }

    let body: String = groups
        .sections()
        .into_iter()
        .map(|(heading, items)| {
            let items_html: String = items
                .iter()
                .enumerate()
                .map(|(index, suggestion)| render_item(suggestion, query, index))
                .collect();
            format!(
                r#"<div class="suggestion-group" role="group" aria-label="{heading}">
        <div class="suggestion-heading">{heading}</div>
        <ul>{items_html}</ul>
    </div>"#
            )
        })
        .collect();

    wrap(body)
}

fn render_item(suggestion: &Suggestion, query: &str, index: usize) -> String {
    let text = if suggestion.popular {
        html_escape(&suggestion.text)
    } else {
        highlight(&suggestion.text, query)
    };
    let thumbnail = match &suggestion.thumbnail {
        Some(src) if !src.is_empty() => format!(
            r#"<img src="{}" alt="" class="suggestion-thumb" loading="lazy">"#,
            html_escape(src)
        ),
        _ => String::new(),
    };

    format!(
        r#"<li class="suggestion-item {}" data-suggestion-id="{}" style="animation-delay: {}ms"><a href="/?q={}">{}<span>{}</span></a></li>"#,
        suggestion.category.as_str(),
        html_escape(suggestion.id.as_str()),
        index * 30,
        urlencoding::encode(&suggestion.text),
        thumbnail,
        text
    )
}

fn wrap(body: String) -> String {
    format!(
        r#"<div class="suggestions" data-section="suggestions" role="listbox">
    {}
</div>"#,
        body
    )
}

/// Skeleton lines shown while suggestions load.
pub fn render_suggestions_skeleton() -> String {
    let lines: String = ["w-3-4", "w-1-2", "w-5-6", "w-2-3"]
        .iter()
        .map(|width| format!(r#"<div class="skeleton-text {}"></div>"#, width))
        .collect();
    wrap(format!(r#"<div class="suggestions-loading">{}</div>"#, lines))
}
