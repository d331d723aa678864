//! Brand search-interest trend data.
//!
//! The numbers are a relative interest index (Google Trends style) for the
//! DK sneaker and two competitors. They describe a fixed historical
//! narrative, so the dataset is built from literals and never changes.
use serde::Serialize;

/// Number of time points shared by every series.
pub const TIME_POINTS: usize = 8;

pub const MONTHS: [&str; TIME_POINTS] = [
    "2022-08", "2022-10", "2022-12", "2023-02", "2023-04", "2023-05", "2023-06", "2023-07",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    Brand,
    Competitor,
}

/// A named series aligned to [`MONTHS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub name: &'static str,
    /// Change over the period as printed in the legend.
    pub change: &'static str,
    pub role: SeriesRole,
    pub color: &'static str,
    pub values: [u32; TIME_POINTS],
}

impl TrendSeries {
    /// Legend entry, e.g. `DK (+177%)`.
    pub fn legend(&self) -> String {
        format!("{} ({})", self.name, self.change)
    }

    pub fn value_at(&self, label: &str) -> Option<u32> {
        MONTHS
            .iter()
            .position(|month| *month == label)
            .map(|idx| self.values[idx])
    }
}

/// A labelled point drawn on top of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendAnnotation {
    pub label: &'static str,
    pub value: u32,
    pub text: &'static str,
}

/// One row of the tabular view: a time label and one value per series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendRow {
    pub label: &'static str,
    pub values: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendDataset {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub labels: [&'static str; TIME_POINTS],
    pub series: Vec<TrendSeries>,
    pub annotations: Vec<TrendAnnotation>,
}

impl TrendDataset {
    pub fn series_names(&self) -> Vec<&'static str> {
        self.series.iter().map(|s| s.name).collect()
    }

    pub fn series_by_name(&self, name: &str) -> Option<&TrendSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Table keyed by time label, columns in series order.
    pub fn rows(&self) -> Vec<TrendRow> {
        self.labels
            .iter()
            .copied()
            .enumerate()
            .map(|(idx, label)| TrendRow {
                label,
                values: self.series.iter().map(|s| s.values[idx]).collect(),
            })
            .collect()
    }
}

/// Build the brand comparison dataset used by the trend chart.
pub fn build_trend_dataset() -> TrendDataset {
    TrendDataset {
        title: "品牌搜尋量趨勢比較 (Google Trends)",
        x_title: "時間",
        y_title: "搜尋熱度",
        labels: MONTHS,
        series: vec![
            TrendSeries {
                name: "DK",
                change: "+177%",
                role: SeriesRole::Brand,
                color: "#2563eb",
                values: [10, 12, 15, 30, 80, 450, 300, 750],
            },
            TrendSeries {
                name: "Vanger",
                change: "-34%",
                role: SeriesRole::Competitor,
                color: "#94a3b8",
                values: [50, 55, 60, 55, 50, 45, 40, 35],
            },
            TrendSeries {
                name: "林果",
                change: "-29%",
                role: SeriesRole::Competitor,
                color: "#cbd5e1",
                values: [80, 75, 70, 65, 60, 65, 60, 55],
            },
        ],
        annotations: vec![TrendAnnotation {
            label: "2023-05",
            value: 450,
            text: "策略啟動",
        }],
    }
}
