use crate::config::PREVIEW_THRESHOLD;
use crate::markdown::MarkdownRenderer;
use log::warn;
use std::fmt::Display;

const MISSING_HTML: &str = "<p>No README available for this project.</p>";
const FAILED_HTML: &str = r#"<p class="readme-error">Unable to load README.</p>"#;

#[derive(Clone, Debug, PartialEq)]
enum Body {
    Loaded { full: String, preview: Option<String> },
    Missing,
    Failed,
}

/// README block of a project card.
///
/// Long READMEs keep both renderings so the card can switch between the
/// preview and the full text without rendering again.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadmeView {
    body: Body,
    expanded: bool,
}

impl ReadmeView {
    /// Render a fetched README, with a preview when it exceeds `threshold` characters
    pub fn render(renderer: &MarkdownRenderer, source: &str, threshold: usize) -> Self {
        let full = renderer.render(source);
        let preview = MarkdownRenderer::needs_preview(source, threshold)
            .then(|| renderer.render_preview(source, threshold));
        Self {
            body: Body::Loaded { full, preview },
            expanded: false,
        }
    }

    /// Build from the outcome of a README fetch.
    /// `Ok(None)` means the repository has no README.
    pub fn from_fetch<E: Display>(renderer: &MarkdownRenderer, fetched: Result<Option<String>, E>) -> Self {
        match fetched {
            Ok(Some(source)) => Self::render(renderer, &source, PREVIEW_THRESHOLD),
            Ok(None) => Self::missing(),
            Err(err) => {
                let repo = renderer.repo().map_or_else(|| "<unknown>".to_owned(), ToString::to_string);
                warn!("README for {repo} could not be loaded: {err}");
                Self::failed()
            }
        }
    }

    pub fn missing() -> Self {
        Self { body: Body::Missing, expanded: false }
    }

    pub fn failed() -> Self {
        Self { body: Body::Failed, expanded: false }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.body, Body::Loaded { .. })
    }

    /// Whether there is a preview to switch away from
    pub fn is_collapsible(&self) -> bool {
        matches!(self.body, Body::Loaded { preview: Some(_), .. })
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between preview and full text; no-op for short READMEs
    pub fn toggle(mut self) -> Self {
        if self.is_collapsible() {
            self.expanded = !self.expanded;
        }
        self
    }

    /// The fragment currently shown
    pub fn html(&self) -> &str {
        match &self.body {
            Body::Loaded { preview: Some(preview), .. } if !self.expanded => preview.as_str(),
            Body::Loaded { full, .. } => full.as_str(),
            Body::Missing => MISSING_HTML,
            Body::Failed => FAILED_HTML,
        }
    }

    /// Caption of the expand/collapse button, if there is one
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.is_collapsible()
            .then(|| if self.expanded { "Show Less" } else { "Show More" })
    }

    /// Card markup with both renderings and the hidden one styled out
    pub fn to_html(&self) -> String {
        const HIDDEN: &str = r#" style="display: none;""#;
        match &self.body {
            Body::Loaded { full, preview: Some(preview) } => {
                let (preview_style, full_style) = if self.expanded { (HIDDEN, "") } else { ("", HIDDEN) };
                format!(
                    concat!(
                        r#"<div class="readme-content">"#,
                        r#"<div class="readme-preview"{}>{}</div>"#,
                        r#"<div class="readme-full"{}>{}</div>"#,
                        r#"<button class="readme-toggle">{}</button>"#,
                        "</div>"
                    ),
                    preview_style,
                    preview,
                    full_style,
                    full,
                    if self.expanded { "Show Less" } else { "Show More" }
                )
            }
            Body::Loaded { full, preview: None } => {
                format!(r#"<div class="readme-content">{full}</div>"#)
            }
            Body::Missing => format!(r#"<div class="readme-content">{MISSING_HTML}</div>"#),
            Body::Failed => FAILED_HTML.to_owned(),
        }
    }
}
