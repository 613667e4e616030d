//! Page shell: document head, header and footer around the sections.

use crate::escape::html_escape;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Document wrapper around the page sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// HTML between `<body>` and the sections.
    pub body_start: String,
    /// HTML between the sections and `</body>`.
    pub body_end: String,
}

impl Shell {
    /// Create a shell with the storefront header and footer.
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: format!("{}\n<main>\n", render_site_header()),
            body_end: format!("</main>\n{}\n", render_site_footer()),
        }
    }

    /// Render the part before the sections.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the part after the sections.
    pub fn render_closing(&self) -> String {
        format!("{}</body>\n</html>\n", self.body_end)
    }

    /// Render a complete document around `sections`.
    pub fn render(&self, sections: &str) -> String {
        let mut html = self.render_opening();
        html.push_str(sections);
        html.push_str(&self.render_closing());
        html
    }
}

fn render_site_header() -> String {
    r#"<header class="site-header">
    <a href="/" class="brand">PricePal</a>
</header>"#
        .to_string()
}

fn render_site_footer() -> String {
    r##"<footer class="site-footer">
    <div class="footer-columns">
        <div>
            <h3>PricePal</h3>
            <p>One Search. All Prices. Smarter Shopping Starts Here.</p>
        </div>
        <div>
            <h3>Quick Links</h3>
            <a href="/">Home</a>
            <a href="/#how-it-works">How It Works</a>
        </div>
        <div>
            <h3>Affiliate Disclaimer</h3>
            <p>As an affiliate, we may earn a small commission when you buy through our links, at no extra cost to you.</p>
        </div>
    </div>
    <p class="copyright">&copy; PricePal. All rights reserved.</p>
</footer>"##
        .to_string()
}
