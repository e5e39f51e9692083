//! HTML rendering for the landing, search and error pages.
//!
//! Pages share one document shell (head, header with the search form, and a
//! `role="main"` content region). Search results can also be rendered as the
//! content region alone, which the browser script swaps in place.
//!
//! All interpolated text is escaped.

use std::fmt::Write;

use newsdesk_core::{Article, PaginationView};

/// Data for the landing page.
#[derive(Debug, Clone, Copy)]
pub struct IndexView<'a> {
    /// Page title.
    pub title: &'a str,
    pub article: &'a Article,
}

/// Data for the search results page.
#[derive(Debug, Clone)]
pub struct SearchView<'a> {
    /// Page title.
    pub title: String,
    pub query: &'a str,
    pub articles: &'a [Article],
    pub has_articles: bool,
    pub pagination: &'a PaginationView,
}

impl<'a> SearchView<'a> {
    pub fn new(query: &'a str, articles: &'a [Article], pagination: &'a PaginationView) -> Self {
        Self {
            title: format!("Search Results for “{query}”"),
            query,
            articles,
            has_articles: !articles.is_empty(),
            pagination,
        }
    }
}

/// Options for search rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Render only the content region, without the document shell.
    pub content_only: bool,
}

/// Renders pages. Built once at startup and shared by all requests.
#[derive(Debug, Clone)]
pub struct Renderer {
    site_name: String,
    stylesheet: String,
    script: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { site_name: "Newsdesk".into(), stylesheet: "/main.css".into(), script: "/main.js".into() }
    }
}

impl Renderer {
    /// Render the landing page for a single article.
    pub fn render_index(&self, view: &IndexView<'_>) -> String {
        let mut content = String::new();
        content.push_str("<section class=\"featured\">\n");
        push_article(&mut content, view.article);
        content.push_str("</section>\n");
        self.render_base(view.title, "", &content)
    }

    /// Render search results, as a full document or content region only.
    pub fn render_search(&self, view: &SearchView<'_>, opts: RenderOptions) -> String {
        let content = search_content(view);
        if opts.content_only { content } else { self.render_base(&view.title, view.query, &content) }
    }

    /// Render the 404 page.
    pub fn render_not_found(&self) -> String {
        self.render_base(
            "Page not found",
            "",
            "<section class=\"message\">\n<h1>Page not found</h1>\n<p>Try searching for an article instead.</p>\n</section>\n",
        )
    }

    /// Render the 500 page.
    pub fn render_error(&self) -> String {
        self.render_base(
            "Something went wrong",
            "",
            "<section class=\"message\">\n<h1>Something went wrong</h1>\n<p>Please try again in a moment.</p>\n</section>\n",
        )
    }

    fn render_base(&self, title: &str, query: &str, content: &str) -> String {
        let mut html = String::with_capacity(content.len() + 1024);
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title} | {site}</title>\n<link rel=\"stylesheet\" href=\"{css}\">\n\
             <script src=\"{js}\" defer></script>\n</head>\n<body>\n\
             <header class=\"site-header\">\n<a class=\"site-name\" href=\"/\">{site}</a>\n\
             <form class=\"search\" action=\"/search\" method=\"get\" data-search-form>\n\
             <input type=\"search\" name=\"q\" value=\"{query}\" placeholder=\"Search articles\" aria-label=\"Search articles\">\n\
             <button type=\"submit\">Search</button>\n</form>\n</header>\n\
             <main role=\"main\">\n{content}</main>\n</body>\n</html>\n",
            title = escape_html(title),
            site = escape_html(&self.site_name),
            css = escape_html(&self.stylesheet),
            js = escape_html(&self.script),
            query = escape_html(query),
        );
        html
    }
}

fn search_content(view: &SearchView<'_>) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&view.title));

    if view.has_articles {
        html.push_str("<ol class=\"results\">\n");
        for article in view.articles {
            html.push_str("<li>\n");
            push_article(&mut html, article);
            html.push_str("</li>\n");
        }
        html.push_str("</ol>\n");
    } else {
        html.push_str("<p class=\"no-results\">No articles matched your search.</p>\n");
    }

    if view.pagination.has_pagination {
        let _ = write!(
            html,
            "<form class=\"pagination\" action=\"/search\" method=\"get\" data-search-form>\n\
             <input type=\"hidden\" name=\"q\" value=\"{}\">\n",
            escape_html(view.query)
        );
        for control in &view.pagination.pages {
            if control.is_selected {
                let _ = writeln!(
                    html,
                    "<button type=\"submit\" name=\"page\" value=\"{}\" aria-current=\"page\" disabled>{}</button>",
                    control.page, control.label
                );
            } else {
                let _ = writeln!(
                    html,
                    "<button type=\"submit\" name=\"page\" value=\"{}\">{}</button>",
                    control.page, control.label
                );
            }
        }
        html.push_str("</form>\n");
    }

    html
}

fn push_article(html: &mut String, article: &Article) {
    let _ = write!(
        html,
        "<article>\n<h2><a href=\"{href}\">{title}</a></h2>\n\
         <time datetime=\"{ts}\">{published}</time>\n<p>{summary}</p>\n</article>\n",
        href = escape_html(&article.permalink),
        title = escape_html(&article.title),
        ts = escape_html(&article.published_timestamp),
        published = escape_html(&article.published),
        summary = escape_html(&article.summary),
    );
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
