//! Chart model for the dashboard.
//!
//! The registry never draws anything itself. It builds a [`ChartConfig`] per
//! declared chart and hands it to a [`ChartBackend`], which returns an opaque
//! handle that can later be resized in place.
//!
//! - `backend` - the capability seam (surfaces, construct, resize)
//! - `layout` - pure chart geometry (ticks, category positions, hit testing)
//! - `canvas` - the built-in backend whose handles cache a layout

mod backend;
mod layout;
mod canvas;

pub use backend::{ChartBackend, SurfaceLookup, Surface, SurfaceMap};
pub use layout::{ChartLayout, PlotArea, YTick, nice_step, smooth_path};
pub use canvas::{CanvasBackend, CanvasChart};

use crate::catalogue::ContentCatalogue;
use crate::theme::hex_to_color32;
use crate::utils::{format_currency_k, format_thousands};
use egui::Color32;
use std::fmt;

/// Identifier of a declared chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartId {
    Revenue,
    UserGrowth,
}

impl ChartId {
    /// All declared charts, in construction order.
    pub const ALL: [ChartId; 2] = [ChartId::Revenue, ChartId::UserGrowth];

    /// Registry key.
    pub fn key(self) -> &'static str {
        match self {
            ChartId::Revenue => "revenue",
            ChartId::UserGrowth => "userGrowth",
        }
    }

    /// Name of the mount point the chart renders into.
    pub fn mount_point(self) -> &'static str {
        match self {
            ChartId::Revenue => "revenueChart",
            ChartId::UserGrowth => "userChart",
        }
    }

    /// Card heading shown above the chart.
    pub fn title(self) -> &'static str {
        match self {
            ChartId::Revenue => "Revenue Trend",
            ChartId::UserGrowth => "User Growth",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    /// Whether categories sit in the middle of equal bands (bars) or on the
    /// plot edges (lines).
    pub fn offset_categories(self) -> bool {
        matches!(self, ChartKind::Bar)
    }
}

/// Y-axis tick and tooltip value formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormat {
    /// `45000` -> `$45k`
    CurrencyThousands,
    /// `1543` -> `1,543`
    Thousands,
}

impl TickFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            TickFormat::CurrencyThousands => format_currency_k(value),
            TickFormat::Thousands => format_thousands(value),
        }
    }
}

/// Which data points a pointer position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionMode {
    /// Match every dataset at the nearest category index.
    pub by_index: bool,
    /// Require the pointer to intersect an element.
    pub intersect: bool,
}

impl InteractionMode {
    /// Nearest by index, no exact intersection required.
    pub const NEAREST_INDEX: InteractionMode = InteractionMode {
        by_index: true,
        intersect: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// Legend presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legend {
    pub position: LegendPosition,
    pub point_style: bool,
    pub padding: f32,
}

/// Dataset presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub color: Color32,
    /// Alpha of the area fill under a line; `None` disables the fill.
    pub fill_alpha: Option<u8>,
    pub border_width: f32,
    /// Bezier tension for lines (0 = straight segments).
    pub tension: f32,
    pub point_radius: f32,
    pub point_hover_radius: f32,
    pub corner_radius: f32,
}

/// Everything a backend needs to build one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub values: Vec<f64>,
    pub style: DatasetStyle,
    pub tick_format: TickFormat,
    pub begin_at_zero: bool,
    pub interaction: InteractionMode,
    pub legend: Legend,
    /// Follow the surface size instead of keeping an aspect ratio.
    pub responsive: bool,
}

const TOP_LEGEND: Legend = Legend {
    position: LegendPosition::Top,
    point_style: true,
    padding: 20.0,
};

impl ChartConfig {
    /// Line chart of monthly revenue with "$Nk" ticks.
    pub fn revenue(catalogue: &ContentCatalogue) -> Self {
        Self {
            kind: ChartKind::Line,
            labels: catalogue.chart_data.months.clone(),
            dataset_label: "Monthly Revenue ($)".to_string(),
            values: catalogue.chart_data.monthly_revenue.clone(),
            style: DatasetStyle {
                color: hex_to_color32("#1FB8CD"),
                fill_alpha: Some(26),
                border_width: 3.0,
                tension: 0.4,
                point_radius: 6.0,
                point_hover_radius: 8.0,
                corner_radius: 0.0,
            },
            tick_format: TickFormat::CurrencyThousands,
            begin_at_zero: true,
            interaction: InteractionMode::NEAREST_INDEX,
            legend: TOP_LEGEND,
            responsive: true,
        }
    }

    /// Bar chart of monthly user growth with thousands separators.
    pub fn user_growth(catalogue: &ContentCatalogue) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: catalogue.chart_data.months.clone(),
            dataset_label: "User Growth".to_string(),
            values: catalogue.chart_data.user_growth.clone(),
            style: DatasetStyle {
                color: hex_to_color32("#FFC185"),
                fill_alpha: None,
                border_width: 1.0,
                tension: 0.0,
                point_radius: 0.0,
                point_hover_radius: 0.0,
                corner_radius: 6.0,
            },
            tick_format: TickFormat::Thousands,
            begin_at_zero: true,
            interaction: InteractionMode::NEAREST_INDEX,
            legend: TOP_LEGEND,
            responsive: true,
        }
    }

    /// Builds the configuration for a declared chart.
    pub fn for_chart(id: ChartId, catalogue: &ContentCatalogue) -> Self {
        match id {
            ChartId::Revenue => Self::revenue(catalogue),
            ChartId::UserGrowth => Self::user_growth(catalogue),
        }
    }

    /// Largest value in the dataset, or 0 when empty.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}
