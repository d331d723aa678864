//! Section selection and layout conventions.
//!
//! The selection is a plain value handed to the renderer on every pass.
//! Nothing here is global, so concurrent viewers never share a selection.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The seven sections of the campaign review, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    KeyWins,
    Trend,
    Strategy,
    Trust,
    Authority,
    Conversion,
    Conclusion,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::KeyWins,
        Section::Trend,
        Section::Strategy,
        Section::Trust,
        Section::Authority,
        Section::Conversion,
        Section::Conclusion,
    ];

    /// 1-based position in the report.
    pub fn number(&self) -> usize {
        match self {
            Section::KeyWins => 1,
            Section::Trend => 2,
            Section::Strategy => 3,
            Section::Trust => 4,
            Section::Authority => 5,
            Section::Conversion => 6,
            Section::Conclusion => 7,
        }
    }

    pub fn from_number(number: usize) -> Option<Section> {
        number
            .checked_sub(1)
            .and_then(|idx| Section::ALL.get(idx))
            .copied()
    }

    /// Stable identifier used for anchors and page file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::KeyWins => "key-wins",
            Section::Trend => "trend",
            Section::Strategy => "strategy",
            Section::Trust => "trust",
            Section::Authority => "authority",
            Section::Conversion => "conversion",
            Section::Conclusion => "conclusion",
        }
    }

    /// Short label shown in navigation widgets.
    pub fn label(&self) -> &'static str {
        match self {
            Section::KeyWins => "戰績總覽",
            Section::Trend => "聲量趨勢",
            Section::Strategy => "策略飛輪",
            Section::Trust => "口碑與信任",
            Section::Authority => "權威背書",
            Section::Conversion => "社群與廣告",
            Section::Conclusion => "結論",
        }
    }

    /// Full section heading.
    pub fn title(&self) -> &'static str {
        match self {
            Section::KeyWins => "1. 戰績總覽 (Key Wins)",
            Section::Trend => "2. 聲量趨勢：在對手退步時一飛沖天",
            Section::Strategy => "3. 策略飛輪 (Strategy)",
            Section::Trust => "4. 執行：口碑與信任 (Step 1)",
            Section::Authority => "5. 執行：權威背書 (Step 2 & 3)",
            Section::Conversion => "6. 執行：社群與廣告 (Step 4 & 5)",
            Section::Conclusion => "7. 結論",
        }
    }

    /// File name of this section's page in a paged site.
    pub fn page_file_name(&self) -> String {
        format!("{}.html", self.slug())
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::KeyWins
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Accepts the section number, its slug, its label or its display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<usize>() {
            return Section::from_number(number)
                .ok_or_else(|| format!("Section number out of range: {} (expected 1-7)", number));
        }
        let lowered = trimmed.to_lowercase().replace('_', "-");
        Section::ALL
            .iter()
            .find(|section| {
                section.slug() == lowered
                    || section.label() == trimmed
                    || section.to_string() == trimmed
            })
            .copied()
            .ok_or_else(|| format!("Unknown section: {}", s))
    }
}

/// Which section is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationSelection {
    section: Section,
}

impl NavigationSelection {
    pub fn new(section: Section) -> Self {
        Self { section }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Replace the previous selection.
    pub fn select(&mut self, section: Section) {
        self.section = section;
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.section == section
    }
}

/// Map a user choice to the section to render; no choice means the first section.
pub fn current_section(selection: Option<Section>) -> NavigationSelection {
    NavigationSelection::new(selection.unwrap_or_default())
}

/// Page layout conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Every section stacked vertically with a table of contents.
    #[default]
    Scroll,
    /// Every section stacked, each inside a card.
    Cards,
    /// One section per page behind a tab bar.
    Tabs,
    /// One section per page chosen from a sidebar radio list.
    Sidebar,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Scroll,
        LayoutKind::Cards,
        LayoutKind::Tabs,
        LayoutKind::Sidebar,
    ];

    /// Paged layouts render only the selected section.
    pub fn is_paged(&self) -> bool {
        matches!(self, LayoutKind::Tabs | LayoutKind::Sidebar)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutKind::Scroll => "scroll",
            LayoutKind::Cards => "cards",
            LayoutKind::Tabs => "tabs",
            LayoutKind::Sidebar => "sidebar",
        }
    }
}

impl FromStr for LayoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scroll" => Ok(LayoutKind::Scroll),
            "cards" => Ok(LayoutKind::Cards),
            "tabs" => Ok(LayoutKind::Tabs),
            "sidebar" => Ok(LayoutKind::Sidebar),
            _ => Err(format!(
                "Unknown layout: {}. Expected one of: scroll, cards, tabs, sidebar",
                s
            )),
        }
    }
}
