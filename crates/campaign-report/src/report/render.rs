//! Walks the narrative content and produces a [`Report`] for one layout and
//! one navigation selection.
//!
//! Every input arrives through [`RenderContext`]; a render pass reads no
//! global state, so separate viewers can be rendered side by side.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use maud::{html, Markup};

use super::plots::plot_trend;
use super::report::{embed_plot, Report, ReportSection};
use crate::assets::{AssetResolver, ResolvedAsset};
use crate::config::ReportConfig;
use crate::content::{section_blocks, Block, ConclusionPoint, KeyMetric, StrategyCard, Tone};
use crate::navigation::{LayoutKind, NavigationSelection, Section};
use crate::trend::build_trend_dataset;

const TREND_CHART_ID: &str = "trend-chart";

/// Everything a single render pass needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a ReportConfig,
    pub resolver: &'a AssetResolver,
    pub layout: LayoutKind,
    pub selection: NavigationSelection,
    /// Paged navigation links to sibling `<slug>.html` pages. Only set when
    /// those pages are written alongside this one.
    pub link_pages: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        config: &'a ReportConfig,
        resolver: &'a AssetResolver,
        selection: NavigationSelection,
    ) -> Self {
        Self {
            config,
            resolver,
            layout: config.layout,
            selection,
            link_pages: false,
        }
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_page_links(mut self, link_pages: bool) -> Self {
        self.link_pages = link_pages;
        self
    }

    /// Target of a paged navigation entry, if that page exists.
    fn section_href(&self, section: Section) -> Option<String> {
        self.link_pages.then(|| section.page_file_name())
    }

    /// Sections rendered in this pass, in reading order.
    pub fn visible_sections(&self) -> Vec<Section> {
        if self.layout.is_paged() {
            vec![self.selection.section()]
        } else {
            Section::ALL.to_vec()
        }
    }
}

pub fn render_report(ctx: &RenderContext) -> Report {
    let page = &ctx.config.page;
    let mut report = Report::new(&page.title, &page.icon, &page.heading, &ctx.config.version);
    report.set_subheading(&page.subheading);
    report.set_footer(&page.footer);
    report.set_body_class(&format!("layout-{}", ctx.layout.name()));

    match ctx.layout {
        LayoutKind::Scroll | LayoutKind::Cards => report.set_sidebar(contents_sidebar(ctx)),
        LayoutKind::Tabs => report.set_top_navigation(tab_bar(ctx)),
        LayoutKind::Sidebar => report.set_sidebar(radio_sidebar(ctx)),
    }

    for section in ctx.visible_sections() {
        report.add_section(render_section(ctx, section));
    }

    report
}

pub fn render_section(ctx: &RenderContext, section: Section) -> ReportSection {
    let mut rendered = ReportSection::new(section.slug(), section.title());
    rendered.set_card_style(ctx.layout == LayoutKind::Cards);

    for block in section_blocks(section) {
        rendered.add_content(render_block(ctx, &block));
    }

    rendered
}

/// Render every page of the report into `out_dir`.
///
/// Scrolling layouts produce a single `index.html`. Paged layouts produce one
/// page per section plus `index.html` showing the first section.
pub fn render_site<P: AsRef<Path>>(config: &ReportConfig, out_dir: P) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let resolver = AssetResolver::from_config(config);
    let mut written = Vec::new();

    let index = RenderContext::new(config, &resolver, NavigationSelection::default())
        .with_page_links(true);
    let index_path = out_dir.join("index.html");
    render_report(&index).save_to_file(&index_path)?;
    written.push(index_path);

    if config.layout.is_paged() {
        for section in Section::ALL {
            let ctx = RenderContext::new(config, &resolver, NavigationSelection::new(section))
                .with_page_links(true);
            let path = out_dir.join(section.page_file_name());
            render_report(&ctx).save_to_file(&path)?;
            written.push(path);
        }
    }

    log::info!(
        "Rendered {} page(s) with the '{}' layout into {}",
        written.len(),
        config.layout.name(),
        out_dir.display()
    );
    Ok(written)
}

fn contents_sidebar(ctx: &RenderContext) -> Markup {
    let page = &ctx.config.page;
    html! {
        h2 class="sidebar-brand" { (page.sidebar_brand) }
        h3 { (page.sidebar_project) }
        hr;
        p { strong { "目錄：" } }
        ol {
            @for section in Section::ALL {
                li { a href=(format!("#{}", section.slug())) { (section.label()) } }
            }
        }
        hr;
        div class="alert alert-info" { (page.sidebar_hint) }
    }
}

fn tab_bar(ctx: &RenderContext) -> Markup {
    html! {
        nav class="tab-bar" {
            @for section in Section::ALL {
                @let class = if ctx.selection.is_active(section) { "active" } else { "" };
                @if let Some(href) = ctx.section_href(section) {
                    a class=(class) href=(href) { (section) }
                } @else {
                    span class=(class) { (section) }
                }
            }
        }
    }
}

fn radio_sidebar(ctx: &RenderContext) -> Markup {
    let page = &ctx.config.page;
    html! {
        h2 class="sidebar-brand" { (page.sidebar_brand) }
        h3 { (page.sidebar_project) }
        hr;
        p { strong { "前往章節：" } }
        nav class="nav-radios" {
            @for section in Section::ALL {
                @let active = ctx.selection.is_active(section);
                @let class = if active { "nav-radio active" } else { "nav-radio" };
                @if let Some(href) = ctx.section_href(section) {
                    a class=(class) href=(href) {
                        input type="radio" name="section" value=(section.slug()) checked[active];
                        " " (section)
                    }
                } @else {
                    label class=(class) {
                        input type="radio" name="section" value=(section.slug()) checked[active] disabled;
                        " " (section)
                    }
                }
            }
        }
    }
}

fn render_block(ctx: &RenderContext, block: &Block) -> Markup {
    match block {
        Block::Text(text) => html! { p { (inline(text)) } },
        Block::Heading { level, text } => match level {
            3 => html! { h3 { (text) } },
            4 => html! { h4 { (text) } },
            _ => html! { h5 { (text) } },
        },
        Block::Callout { tone, text } => html! {
            div class=(format!("alert alert-{}", tone_class(*tone))) { (inline(text)) }
        },
        Block::Caption(text) => html! { p class="caption" { (inline(text)) } },
        Block::Image { key, caption } => render_image(ctx, key, caption),
        Block::Metrics {
            headline,
            intro,
            metrics,
        } => render_metrics(headline, intro, metrics),
        Block::TrendChart => embed_plot(&plot_trend(&build_trend_dataset()), TREND_CHART_ID),
        Block::Cards(cards) => render_cards(cards),
        Block::Columns(columns) => html! {
            div class="columns" {
                @for column in columns {
                    div class="column" {
                        @for child in column {
                            (render_block(ctx, child))
                        }
                    }
                }
            }
        },
        Block::Tabs(tabs) => html! {
            div class="content-tabs" {
                @for (idx, (label, children)) in tabs.iter().enumerate() {
                    details class="content-tab" open[idx == 0] {
                        summary { (label) }
                        @for child in children {
                            (render_block(ctx, child))
                        }
                    }
                }
            }
        },
        Block::Conclusion {
            title,
            lead,
            points,
        } => render_conclusion(title, lead, points),
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "info",
        Tone::Success => "success",
        Tone::Warning => "warning",
    }
}

/// Text with `**bold**` spans.
fn inline(text: &str) -> Markup {
    html! {
        @for (idx, part) in text.split("**").enumerate() {
            @if idx % 2 == 1 {
                strong { (part) }
            } @else {
                (part)
            }
        }
    }
}

fn render_image(ctx: &RenderContext, key: &str, caption: &str) -> Markup {
    match ctx.resolver.resolve(key) {
        ResolvedAsset::Found { path, filename, .. } => {
            match image_source(&path, ctx.config.embed_images) {
                Ok(src) => html! {
                    figure class="report-image" {
                        img src=(src) alt=(caption);
                        figcaption { (caption) }
                    }
                },
                Err(e) => {
                    log::warn!("Could not load image {}: {:#}", path.display(), e);
                    missing_image(&filename)
                }
            }
        }
        ResolvedAsset::Missing { filename, .. } => missing_image(&filename),
    }
}

fn missing_image(filename: &str) -> Markup {
    html! {
        div class="alert alert-warning missing-asset" { "⚠️ 找不到圖片：" (filename) }
    }
}

/// `src` attribute for an image: a base64 data URI when embedding, the path otherwise.
pub fn image_source(path: &Path, embed: bool) -> Result<String> {
    if !embed {
        return Ok(path.to_string_lossy().into_owned());
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?;
    Ok(format!(
        "data:{};base64,{}",
        mime_type(path),
        STANDARD.encode(bytes)
    ))
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn render_metrics(headline: &str, intro: &str, metrics: &[KeyMetric]) -> Markup {
    html! {
        h3 { (headline) }
        p { (intro) }
        div class="metric-grid" {
            @for metric in metrics {
                div {
                    div class="metric-container" {
                        div class="metric-label" { (metric.label) }
                        div class="metric-value" { (metric.value) }
                        div class="metric-delta" { "↑ " (metric.delta) }
                    }
                    p class="caption" { (metric.caption) }
                }
            }
        }
    }
}

fn render_cards(cards: &[StrategyCard]) -> Markup {
    html! {
        div class="card-grid" {
            @for card in cards {
                div class="post-card" style=(format!("border-top: 5px solid {};", card.accent)) {
                    h3 { (card.icon) " " (card.title) }
                    p class="card-subtitle" { (card.subtitle) }
                    hr;
                    p { (card.summary) }
                    ul {
                        @for tactic in &card.tactics {
                            li { (tactic) }
                        }
                    }
                }
            }
        }
    }
}

fn render_conclusion(title: &str, lead: &str, points: &[ConclusionPoint]) -> Markup {
    html! {
        div class="conclusion" {
            h3 { (title) }
            p class="lead" { (lead) }
            ul {
                @for point in points {
                    li { strong { (point.term) } (point.text) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_bold() {
        let html = inline("單次合作創造 **232雙+** 的銷量").into_string();
        assert_eq!(html, "單次合作創造 <strong>232雙+</strong> 的銷量");
    }

    #[test]
    fn test_mime_type_by_extension() {
        assert_eq!(mime_type(Path::new("a b.PNG")), "image/png");
        assert_eq!(mime_type(Path::new("截圖.jpg")), "image/jpeg");
        assert_eq!(mime_type(Path::new("noext")), "application/octet-stream");
    }
}
