use super::images::{RepoRef, resolve_image_src};
use crate::config::PREVIEW_ELLIPSIS;
use log::trace;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Single-line captures stop at any of `\r`, `\n`, U+2028 and U+2029.
// Line-anchored patterns use CRLF mode so `^` also starts after `\r`.
macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect(concat!("invalid pattern ", stringify!($name))));
    };
}

pattern!(H3, r"(?mR)^### ([^\r\n\x{2028}\x{2029}]*)");
pattern!(H2, r"(?mR)^## ([^\r\n\x{2028}\x{2029}]*)");
pattern!(H1, r"(?mR)^# ([^\r\n\x{2028}\x{2029}]*)");
pattern!(BOLD_STARS, r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*");
pattern!(BOLD_UNDERSCORES, r"__([^\r\n\x{2028}\x{2029}]*?)__");
pattern!(ITALIC_STAR, r"\*([^\r\n\x{2028}\x{2029}]*?)\*");
pattern!(ITALIC_UNDERSCORE, r"_([^\r\n\x{2028}\x{2029}]*?)_");
pattern!(CODE_BLOCK, r"(?s)```(.*?)```");
pattern!(INLINE_CODE, r"`([^`]+)`");
pattern!(IMAGE, r"!\[([^\]]*)\]\(([^)]+)\)");
pattern!(LINK, r"\[([^\]]+)\]\(([^)]+)\)");
pattern!(UL_STAR, r"(?mR)^\* ([^\r\n\x{2028}\x{2029}]*)");
pattern!(UL_DASH, r"(?mR)^- ([^\r\n\x{2028}\x{2029}]*)");
pattern!(LIST_RUN, r"(?s)(<li>.*</li>)");
pattern!(OL_ITEM, r"(?mR)^[0-9]+\. ([^\r\n\x{2028}\x{2029}]*)");

/// Converts the README dialect to HTML.
///
/// Each pass rewrites the whole output of the previous one, in this order:
/// headers, bold, italic, fenced code, inline code, images, links, unordered
/// items, ordered items, paragraph breaks, and a final `<p>` wrap. Anything
/// that does not match a pass is left as literal text.
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    repo: Option<RepoRef>,
}

impl MarkdownRenderer {
    /// Renderer without repository context; relative images stay relative
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer resolving relative images against `repo`
    pub fn for_repo(repo: RepoRef) -> Self {
        Self { repo: Some(repo) }
    }

    pub fn repo(&self) -> Option<&RepoRef> {
        self.repo.as_ref()
    }

    /// Render the full document
    pub fn render(&self, markdown: &str) -> String {
        let html = headers(markdown);
        let html = emphasis(&html);
        let html = code(&html);
        let html = self.images(&html);
        let html = LINK
            .replace_all(&html, r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#)
            .into_owned();
        let html = lists(&html);
        let html = html.replace("\n\n", "</p><p>").replace('\n', "<br>");

        trace!("rendered {} bytes of markdown into {} bytes", markdown.len(), html.len());
        if html.starts_with('<') {
            html
        } else {
            format!("<p>{html}</p>")
        }
    }

    /// Render at most `threshold` characters, followed by an ellipsis when the
    /// source was cut. Sources within the threshold render in full.
    pub fn render_preview(&self, markdown: &str, threshold: usize) -> String {
        match markdown.char_indices().nth(threshold) {
            Some((cut, _)) => self.render(&format!("{}{PREVIEW_ELLIPSIS}", &markdown[..cut])),
            None => self.render(markdown),
        }
    }

    /// Whether `render_preview` would truncate this source
    pub fn needs_preview(markdown: &str, threshold: usize) -> bool {
        markdown.chars().nth(threshold).is_some()
    }

    fn images(&self, html: &str) -> String {
        IMAGE
            .replace_all(html, |caps: &Captures| {
                let src = resolve_image_src(&caps[2], self.repo.as_ref());
                format!(
                    r#"<img src="{}" alt="{}" loading="lazy" onerror="this.style.display='none'">"#,
                    quote_attr(&src),
                    quote_attr(&caps[1])
                )
            })
            .into_owned()
    }
}

/// Longest marker first so `###` is never read as `#` followed by `##`
fn headers(text: &str) -> String {
    let html = H3.replace_all(text, "<h3>${1}</h3>");
    let html = H2.replace_all(&html, "<h2>${1}</h2>");
    H1.replace_all(&html, "<h1>${1}</h1>").into_owned()
}

/// Bold runs before italic so `**x**` is not eaten as two empty italics
fn emphasis(text: &str) -> String {
    let html = BOLD_STARS.replace_all(text, "<strong>${1}</strong>");
    let html = BOLD_UNDERSCORES.replace_all(&html, "<strong>${1}</strong>");
    let html = ITALIC_STAR.replace_all(&html, "<em>${1}</em>");
    ITALIC_UNDERSCORE.replace_all(&html, "<em>${1}</em>").into_owned()
}

fn code(text: &str) -> String {
    let html = CODE_BLOCK.replace_all(text, "<pre><code>${1}</code></pre>");
    INLINE_CODE.replace_all(&html, "<code>${1}</code>").into_owned()
}

/// Only the first `<li>` through the last `</li>` of the unordered items is
/// wrapped, once. Ordered items become bare `<li>` with no `<ol>`.
fn lists(text: &str) -> String {
    let html = UL_STAR.replace_all(text, "<li>${1}</li>");
    let html = UL_DASH.replace_all(&html, "<li>${1}</li>");
    let html = LIST_RUN.replacen(&html, 1, "<ul>${1}</ul>");
    OL_ITEM.replace_all(&html, "<li>${1}</li>").into_owned()
}

fn quote_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}
