//! "How It Works" section.

const STEPS: [(&str, &str); 4] = [
    ("Search", "Enter any product name in the search bar"),
    ("Compare", "We search all major Indian shopping sites instantly"),
    ("Save", "You compare prices side-by-side"),
    ("Shop", "Click and shop directly via our affiliate links"),
];

/// Render the four-step explainer.
pub fn render_how_it_works() -> String {
    let steps: String = STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, description))| {
            format!(
                r#"<div class="step">
            <span class="step-number">{}</span>
            <h3>{}</h3>
            <p>{}</p>
        </div>"#,
                i + 1,
                title,
                description
            )
        })
        .collect();

    format!(
        r#"<section class="how-it-works" id="how-it-works" data-section="how-it-works">
    <h2>How It Works</h2>
    <div class="steps">
        {}
    </div>
</section>"#,
        steps
    )
}
