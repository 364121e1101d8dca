//! Static dashboard content.
//!
//! The catalogue is the inert data source the controllers read: metric cards,
//! navigation entries, table rows and the monthly chart series. Entries are
//! addressed by their position in each sequence.
//!
//! The on-disk format is JSON with camelCase keys:
//!
//! ```json
//! {
//!   "metrics": [{"title": "Sales", "value": "$45,892", "change": "+12.3%", "icon": "💰", "trend": "up"}],
//!   "navigationItems": [{"name": "Dashboard", "icon": "🏠", "active": true}],
//!   "tableData": [{"id": 1, "name": "John Doe", "email": "john@example.com", "role": "Admin", "status": "Active"}],
//!   "chartData": {"monthlyRevenue": [45000], "userGrowth": [1200], "months": ["Jan"]}
//! }
//! ```

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

static BUILTIN: Lazy<ContentCatalogue> = Lazy::new(builtin_catalogue);

/// Direction of a metric's change figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A headline metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub icon: String,
    pub trend: Trend,
}

/// A sidebar navigation entry.
///
/// `active` is advisory only; the live selection belongs to the sidebar controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub active: bool,
}

/// A row of the users table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl TableRow {
    /// Returns true when the status column reads "Active".
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// Monthly series backing the two charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub monthly_revenue: Vec<f64>,
    pub user_growth: Vec<f64>,
    pub months: Vec<String>,
}

impl ChartSeries {
    /// Checks that every series has one value per month label.
    pub fn validate(&self) -> Result<()> {
        let months = self.months.len();
        if self.monthly_revenue.len() != months {
            bail!(
                "monthlyRevenue has {} values but there are {} month labels",
                self.monthly_revenue.len(),
                months
            );
        }
        if self.user_growth.len() != months {
            bail!(
                "userGrowth has {} values but there are {} month labels",
                self.user_growth.len(),
                months
            );
        }
        Ok(())
    }
}

/// Immutable collection of everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalogue {
    pub metrics: Vec<Metric>,
    pub navigation_items: Vec<NavItem>,
    pub table_data: Vec<TableRow>,
    pub chart_data: ChartSeries,
}

impl Default for ContentCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentCatalogue {
    /// Returns a copy of the content shipped with the application.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parses a catalogue from JSON text and validates its chart series.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalogue: ContentCatalogue =
            serde_json::from_str(json).context("Invalid catalogue JSON")?;
        catalogue.chart_data.validate()?;
        Ok(catalogue)
    }

    /// Loads a catalogue from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalogue {}", path.display()))?;
        let catalogue = Self::from_json_str(&text)
            .with_context(|| format!("Failed to load catalogue {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            metrics = catalogue.metrics.len(),
            rows = catalogue.table_data.len(),
            "Loaded catalogue"
        );
        Ok(catalogue)
    }

    /// Index of the first navigation entry flagged active, if any.
    pub fn initial_nav_index(&self) -> Option<usize> {
        self.navigation_items.iter().position(|item| item.active)
    }
}

fn metric(title: &str, value: &str, change: &str, icon: &str, trend: Trend) -> Metric {
    Metric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        icon: icon.to_string(),
        trend,
    }
}

fn nav(name: &str, icon: &str, active: bool) -> NavItem {
    NavItem {
        name: name.to_string(),
        icon: icon.to_string(),
        active,
    }
}

fn row(id: u32, name: &str, email: &str, role: &str, status: &str) -> TableRow {
    TableRow {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: status.to_string(),
    }
}

fn builtin_catalogue() -> ContentCatalogue {
    ContentCatalogue {
        metrics: vec![
            metric("Total Users", "12,543", "+5.2%", "👥", Trend::Up),
            metric("Sales", "$45,892", "+12.3%", "💰", Trend::Up),
            metric("Orders", "1,284", "-2.1%", "📦", Trend::Down),
            metric("Revenue", "$98,765", "+8.7%", "📈", Trend::Up),
        ],
        navigation_items: vec![
            nav("Dashboard", "🏠", true),
            nav("Users", "👥", false),
            nav("Analytics", "📊", false),
            nav("Settings", "⚙️", false),
            nav("Logout", "🚪", false),
        ],
        table_data: vec![
            row(1, "John Doe", "john@example.com", "Admin", "Active"),
            row(2, "Jane Smith", "jane@example.com", "User", "Active"),
            row(3, "Bob Johnson", "bob@example.com", "Editor", "Inactive"),
            row(4, "Alice Brown", "alice@example.com", "User", "Active"),
            row(5, "Charlie Wilson", "charlie@example.com", "Admin", "Active"),
        ],
        chart_data: ChartSeries {
            monthly_revenue: vec![45000.0, 52000.0, 48000.0, 61000.0, 55000.0, 67000.0],
            user_growth: vec![1200.0, 1350.0, 1180.0, 1420.0, 1380.0, 1543.0],
            months: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let catalogue = ContentCatalogue::builtin();
        assert_eq!(catalogue.metrics.len(), 4);
        assert_eq!(catalogue.navigation_items.len(), 5);
        assert_eq!(catalogue.table_data.len(), 5);
        assert_eq!(catalogue.chart_data.months.len(), 6);
        assert!(catalogue.chart_data.validate().is_ok());
    }

    #[test]
    fn test_initial_nav_index() {
        let mut catalogue = ContentCatalogue::builtin();
        assert_eq!(catalogue.initial_nav_index(), Some(0));

        for item in &mut catalogue.navigation_items {
            item.active = false;
        }
        assert_eq!(catalogue.initial_nav_index(), None);
    }

    #[test]
    fn test_json_roundtrip_keys() {
        let json = serde_json::to_string(&ContentCatalogue::builtin()).unwrap();
        assert!(json.contains("\"navigationItems\""));
        assert!(json.contains("\"monthlyRevenue\""));
        assert!(json.contains("\"trend\":\"down\""));

        let parsed = ContentCatalogue::from_json_str(&json).unwrap();
        assert_eq!(parsed, ContentCatalogue::builtin());
    }

    #[test]
    fn test_mismatched_series_rejected() {
        let mut catalogue = ContentCatalogue::builtin();
        catalogue.chart_data.user_growth.pop();
        let json = serde_json::to_string(&catalogue).unwrap();

        let err = ContentCatalogue::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("userGrowth"));
    }

    #[test]
    fn test_nav_active_defaults_to_false() {
        let item: NavItem = serde_json::from_str(r#"{"name": "Users", "icon": "👥"}"#).unwrap();
        assert!(!item.active);
    }

    #[test]
    fn test_row_status() {
        let catalogue = ContentCatalogue::builtin();
        assert!(catalogue.table_data[0].is_active());
        assert!(!catalogue.table_data[2].is_active());
    }
}
