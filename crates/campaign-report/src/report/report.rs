use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use super::theme::{PLOTLY_CDN, STYLESHEET};

/// Inline a Plotly chart as a `div` plus its drawing script.
pub fn embed_plot(plot: &Plot, div_id: &str) -> Markup {
    html! {
        div class="plot-container" {
            (PreEscaped(plot.to_inline_html(Some(div_id))))
        }
    }
}

/// One titled block of the report.
#[derive(Debug, Clone)]
pub struct ReportSection {
    id: String,
    title: String,
    class: String,
    content: Vec<Markup>,
}

impl ReportSection {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            class: "section-container".to_string(),
            content: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Wrap the section in a card.
    pub fn set_card_style(&mut self, card: bool) {
        self.class = if card {
            "section-container section-card".to_string()
        } else {
            "section-container".to_string()
        };
    }

    pub fn add_content(&mut self, content: Markup) {
        self.content.push(content);
    }

    pub fn render(&self) -> Markup {
        html! {
            section id=(self.id) class=(self.class) {
                h2 { (self.title) }
                @for block in &self.content {
                    (block)
                }
            }
        }
    }
}

/// A standalone HTML document made of sections, with optional navigation.
#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    icon: String,
    heading: String,
    subheading: Option<String>,
    version: String,
    footer: Option<String>,
    body_class: String,
    sidebar: Option<Markup>,
    top_navigation: Option<Markup>,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str, icon: &str, heading: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            heading: heading.to_string(),
            subheading: None,
            version: version.to_string(),
            footer: None,
            body_class: String::new(),
            sidebar: None,
            top_navigation: None,
            sections: Vec::new(),
        }
    }

    pub fn set_subheading(&mut self, subheading: &str) {
        self.subheading = Some(subheading.to_string());
    }

    pub fn set_footer(&mut self, footer: &str) {
        self.footer = Some(footer.to_string());
    }

    pub fn set_body_class(&mut self, class: &str) {
        self.body_class = class.to_string();
    }

    pub fn set_sidebar(&mut self, sidebar: Markup) {
        self.sidebar = Some(sidebar);
    }

    /// Navigation drawn between the header and the first section.
    pub fn set_top_navigation(&mut self, navigation: Markup) {
        self.top_navigation = Some(navigation);
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");

        html! {
            (DOCTYPE)
            html lang="zh-Hant" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.icon) " " (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(STYLESHEET)) }
                }
                body class=(self.body_class) {
                    div class="page" {
                        @if let Some(sidebar) = &self.sidebar {
                            aside class="sidebar" { (sidebar) }
                        }
                        main class="content" {
                            header class="report-header" {
                                h1 { (self.heading) }
                                @if let Some(subheading) = &self.subheading {
                                    h4 { (subheading) }
                                }
                                hr;
                            }
                            @if let Some(navigation) = &self.top_navigation {
                                (navigation)
                            }
                            @for section in &self.sections {
                                (section.render())
                            }
                            footer {
                                hr;
                                p class="caption" {
                                    @if let Some(footer) = &self.footer {
                                        (footer) " | "
                                    }
                                    "Generated " (generated) " | v" (self.version)
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, self.to_html())
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        log::info!("Report written to {}", path.display());
        Ok(())
    }
}
