//! Inline stylesheet for rendered pages.

/// Base styles for the storefront page.
pub const STYLES: &str = r#"
:root { --primary: #2563eb; --text: #1e293b; --muted: #64748b; --surface: #f8fafc; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--text); }
.site-header { padding: 1rem 1.5rem; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
.brand { font-weight: 700; font-size: 1.25rem; color: var(--text); text-decoration: none; }
.hero { max-width: 48rem; margin: 0 auto; padding: 4rem 1.5rem 6rem; text-align: center; }
.hero .accent { color: var(--primary); }
.tagline { color: var(--muted); }
.search-form { display: flex; gap: .5rem; }
.search-form input { flex: 1; padding: 1rem; border: 1px solid #e2e8f0; border-radius: .5rem; background: var(--surface); }
.search-form button, .view-button { background: var(--primary); color: #fff; border: 0; border-radius: .5rem; padding: .75rem 1.5rem; text-decoration: none; text-align: center; }
.suggestions { border: 1px solid #e2e8f0; border-radius: .5rem; box-shadow: 0 4px 6px rgba(0,0,0,.08); max-width: 42rem; margin: .5rem auto; }
.suggestion-heading { font-size: .75rem; color: var(--muted); padding: .5rem 1rem; }
.suggestion-group ul { list-style: none; margin: 0; padding: 0; }
.suggestion-item a { display: flex; gap: .5rem; align-items: center; padding: .5rem 1rem; color: inherit; text-decoration: none; }
.suggestion-item a:hover { background: #eff6ff; }
.suggestion-thumb { width: 2rem; height: 2rem; object-fit: cover; border-radius: .125rem; }
mark.match { background: #fef9c3; color: #713f12; }
.suggestions-empty { text-align: center; padding: 1.5rem; font-size: .875rem; }
.search-results { background: var(--surface); padding: 3rem 1.5rem; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
.product-card { background: #fff; border-radius: .5rem; overflow: hidden; display: flex; flex-direction: column; }
.product-image { position: relative; aspect-ratio: 1; display: flex; align-items: center; justify-content: center; }
.product-image img { width: 100%; height: 100%; object-fit: contain; padding: 1rem; }
.discount-badge { position: absolute; top: .5rem; left: .5rem; background: #16a34a; color: #fff; font-size: .75rem; padding: .125rem .5rem; border-radius: 9999px; }
.product-info { padding: 1rem; display: flex; flex-direction: column; gap: .5rem; }
.product-summary { color: var(--muted); font-size: .875rem; }
.product-meta { display: flex; justify-content: space-between; align-items: flex-end; }
.product-price { font-size: 1.25rem; font-weight: 700; }
.retailer-logo { width: 1.5rem; height: 1.5rem; object-fit: contain; }
.empty-state, .error-state { text-align: center; padding: 4rem 0; color: var(--muted); }
.skeleton-image, .skeleton-text { background: #e2e8f0; border-radius: .25rem; animation: pulse 1.5s ease-in-out infinite; }
.skeleton-image { aspect-ratio: 1; }
.skeleton-text { height: 1rem; margin: .75rem 1rem; }
.skeleton-text.short { width: 50%; }
.how-it-works { padding: 4rem 1.5rem; text-align: center; }
.steps { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 2rem; }
.site-footer { border-top: 1px solid #e2e8f0; padding: 3rem 1.5rem; }
.footer-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem; }
.footer-columns a { display: block; color: var(--muted); }
.copyright { text-align: center; color: var(--muted); font-size: .875rem; }
@keyframes pulse { 50% { opacity: .5; } }
"#;
