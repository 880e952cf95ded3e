//! Chart identities, validated chart specs and the dashboard catalog.

use thiserror::Error;

use crate::state::ThemePref;

/// Shared series palette, applied in order.
pub const CHART_COLORS: [&str; 6] = [
    "#4F46E5", "#10B981", "#F59E0B", "#F43F5E", "#8B5CF6", "#06B6D4",
];

/// Cadence of the live intake feed.
pub const LIVE_TICK_MS: u64 = 5_000;

/// Inclusive lower bound of a generated live point.
pub const LIVE_POINT_MIN: u64 = 10;

/// Exclusive upper bound of a generated live point.
pub const LIVE_POINT_MAX: u64 = 60;

/// The one chart whose series rolls forward on the live tick.
pub const LIVE_CHART: ChartId = ChartId::IncomingVolume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChartId {
    IncomingVolume,
    UserGrowth,
    SlaCompliance,
    DeptDistribution,
    AgentStatus,
    ResolutionTrend,
    UserVolume,
    TicketDistribution,
    WeeklyResolution,
    RequestTypes,
    SupportChannels,
    Satisfaction,
}

impl ChartId {
    pub const ALL: [ChartId; 12] = [
        Self::IncomingVolume,
        Self::UserGrowth,
        Self::SlaCompliance,
        Self::DeptDistribution,
        Self::AgentStatus,
        Self::ResolutionTrend,
        Self::UserVolume,
        Self::TicketDistribution,
        Self::WeeklyResolution,
        Self::RequestTypes,
        Self::SupportChannels,
        Self::Satisfaction,
    ];

    pub fn mount_id(self) -> &'static str {
        match self {
            Self::IncomingVolume => "incoming-volume-chart",
            Self::UserGrowth => "user-growth-chart",
            Self::SlaCompliance => "sla-compliance-chart",
            Self::DeptDistribution => "dept-distribution-chart",
            Self::AgentStatus => "agent-status-chart",
            Self::ResolutionTrend => "resolution-trend-chart",
            Self::UserVolume => "user-volume-chart",
            Self::TicketDistribution => "ticket-dist-chart",
            Self::WeeklyResolution => "weekly-resolution-chart",
            Self::RequestTypes => "request-types-chart",
            Self::SupportChannels => "support-channels-chart",
            Self::Satisfaction => "satisfaction-score-chart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::IncomingVolume => "Incoming volume",
            Self::UserGrowth => "User growth",
            Self::SlaCompliance => "SLA compliance",
            Self::DeptDistribution => "Department distribution",
            Self::AgentStatus => "Agent status",
            Self::ResolutionTrend => "Resolution trend",
            Self::UserVolume => "Ticket volume",
            Self::TicketDistribution => "Ticket distribution",
            Self::WeeklyResolution => "Weekly resolution",
            Self::RequestTypes => "Request types",
            Self::SupportChannels => "Support channels",
            Self::Satisfaction => "Satisfaction score",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartSpecError {
    #[error("chart has no series data")]
    EmptySeries,
    #[error("series {series:?} has {points} points for {categories} categories")]
    CategoryMismatch {
        series: String,
        points: usize,
        categories: usize,
    },
    #[error("{values} values labelled by {labels} labels")]
    LabelMismatch { values: usize, labels: usize },
    #[error("value {value} is outside the allowed range for this chart")]
    ValueOutOfRange { value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: Option<String>,
    pub data: Vec<f64>,
}

impl ChartSeries {
    pub fn named(name: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            name: Some(name.into()),
            data,
        }
    }
}

/// Tagged chart shape. Constructed through the validating `area`/`bar`/...
/// helpers; a spec that exists is internally consistent.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Area {
        series: Vec<ChartSeries>,
        categories: Vec<String>,
    },
    Bar {
        series: Vec<ChartSeries>,
        categories: Vec<String>,
    },
    Donut {
        values: Vec<f64>,
        labels: Vec<String>,
    },
    Pie {
        values: Vec<f64>,
        labels: Vec<String>,
    },
    RadialBar {
        values: Vec<f64>,
        labels: Vec<String>,
        total_label: Option<(String, String)>,
        hollow_pct: u8,
        value_suffix: String,
    },
}

impl ChartSpec {
    pub fn area(
        series: Vec<ChartSeries>,
        categories: Vec<String>,
    ) -> Result<Self, ChartSpecError> {
        Self::check_axes(&series, &categories)?;
        Ok(Self::Area { series, categories })
    }

    pub fn bar(series: Vec<ChartSeries>, categories: Vec<String>) -> Result<Self, ChartSpecError> {
        Self::check_axes(&series, &categories)?;
        Ok(Self::Bar { series, categories })
    }

    pub fn donut(values: Vec<f64>, labels: Vec<String>) -> Result<Self, ChartSpecError> {
        Self::check_slices(&values, &labels)?;
        Ok(Self::Donut { values, labels })
    }

    pub fn pie(values: Vec<f64>, labels: Vec<String>) -> Result<Self, ChartSpecError> {
        Self::check_slices(&values, &labels)?;
        Ok(Self::Pie { values, labels })
    }

    pub fn radial_bar(
        values: Vec<f64>,
        labels: Vec<String>,
        total_label: Option<(String, String)>,
        hollow_pct: u8,
        value_suffix: impl Into<String>,
    ) -> Result<Self, ChartSpecError> {
        if values.is_empty() {
            return Err(ChartSpecError::EmptySeries);
        }
        if values.len() != labels.len() {
            return Err(ChartSpecError::LabelMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        for value in &values {
            if !value.is_finite() || *value < 0.0 || *value > 100.0 {
                return Err(ChartSpecError::ValueOutOfRange {
                    value: value.to_string(),
                });
            }
        }
        Ok(Self::RadialBar {
            values,
            labels,
            total_label,
            hollow_pct,
            value_suffix: value_suffix.into(),
        })
    }

    fn check_axes(
        series: &[ChartSeries],
        categories: &[String],
    ) -> Result<(), ChartSpecError> {
        if series.is_empty() || series.iter().all(|s| s.data.is_empty()) {
            return Err(ChartSpecError::EmptySeries);
        }
        for s in series {
            if s.data.len() != categories.len() {
                return Err(ChartSpecError::CategoryMismatch {
                    series: s.name.clone().unwrap_or_default(),
                    points: s.data.len(),
                    categories: categories.len(),
                });
            }
        }
        Ok(())
    }

    fn check_slices(values: &[f64], labels: &[String]) -> Result<(), ChartSpecError> {
        if values.is_empty() {
            return Err(ChartSpecError::EmptySeries);
        }
        if values.len() != labels.len() {
            return Err(ChartSpecError::LabelMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        for value in values {
            if !value.is_finite() || *value < 0.0 {
                return Err(ChartSpecError::ValueOutOfRange {
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Presentation options shared by every chart. Theme changes replace these
/// wholesale through [`ChartOptionsPatch`]; series data is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBaseOptions {
    pub theme_mode: ThemePref,
    pub palette: Vec<String>,
    pub stroke_smooth: bool,
    pub stroke_width: u8,
    pub grid_dash: u8,
}

impl ChartBaseOptions {
    pub fn for_theme(theme: ThemePref) -> Self {
        Self {
            theme_mode: theme,
            palette: CHART_COLORS.iter().map(|c| c.to_string()).collect(),
            stroke_smooth: true,
            stroke_width: 2,
            grid_dash: 4,
        }
    }
}

/// Partial options update. Only the fields present are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOptionsPatch {
    pub theme_mode: Option<ThemePref>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: ChartId,
    pub spec: ChartSpec,
}

fn series(name: &str, data: &[f64]) -> Vec<ChartSeries> {
    vec![ChartSeries::named(name, data.to_vec())]
}

fn cats(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

/// The full dashboard catalog. Every entry validates at construction, so a
/// catalog mismatch surfaces at startup instead of at render time.
pub fn chart_catalog() -> Result<Vec<CatalogEntry>, ChartSpecError> {
    let entries = vec![
        CatalogEntry {
            id: ChartId::IncomingVolume,
            spec: ChartSpec::area(
                series("Tickets", &[31.0, 40.0, 28.0, 51.0, 42.0, 109.0, 100.0]),
                cats(&["8am", "10am", "12pm", "2pm", "4pm", "6pm", "8pm"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::UserGrowth,
            spec: ChartSpec::bar(
                series(
                    "New Users",
                    &[44.0, 55.0, 57.0, 56.0, 61.0, 58.0, 63.0, 60.0, 66.0],
                ),
                cats(&[
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep",
                ]),
            )?,
        },
        CatalogEntry {
            id: ChartId::SlaCompliance,
            spec: ChartSpec::radial_bar(
                vec![100.0, 98.5, 97.2],
                cats(&["Gold", "Silver", "Bronze"]),
                Some(("SLA".to_string(), "98.5%".to_string())),
                50,
                "%",
            )?,
        },
        CatalogEntry {
            id: ChartId::DeptDistribution,
            spec: ChartSpec::donut(
                vec![35.0, 25.0, 20.0, 20.0],
                cats(&["IT Support", "HR", "Finance", "Sales"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::AgentStatus,
            spec: ChartSpec::pie(
                vec![12.0, 6.0, 4.0, 3.0],
                cats(&["Online", "Away", "Busy", "Offline"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::ResolutionTrend,
            spec: ChartSpec::area(
                series("Avg Hours", &[4.5, 3.8, 5.2, 4.1, 3.5, 3.2, 2.8]),
                cats(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::UserVolume,
            spec: ChartSpec::bar(
                series("Tickets", &[4.0, 6.0, 3.0, 8.0, 5.0, 7.0]),
                cats(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::TicketDistribution,
            spec: ChartSpec::donut(
                vec![60.0, 25.0, 15.0],
                cats(&["Resolved", "Open", "Critical"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::WeeklyResolution,
            spec: ChartSpec::area(
                series("Resolved", &[10.0, 15.0, 8.0, 20.0, 18.0, 25.0, 30.0]),
                cats(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::RequestTypes,
            spec: ChartSpec::donut(
                vec![40.0, 30.0, 30.0],
                cats(&["Hardware", "Software", "Network"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::SupportChannels,
            spec: ChartSpec::donut(
                vec![45.0, 35.0, 20.0],
                cats(&["Email", "Chat", "Phone"]),
            )?,
        },
        CatalogEntry {
            id: ChartId::Satisfaction,
            spec: ChartSpec::radial_bar(
                vec![88.0],
                cats(&["Satisfaction"]),
                None,
                70,
                "%",
            )?,
        },
    ];
    Ok(entries)
}

/// Roll a live series forward: drop the oldest point, append the new one.
/// The series length is invariant once seeded.
pub fn advance_live_series(data: &mut Vec<f64>, next: f64) {
    if !data.is_empty() {
        data.remove(0);
    }
    data.push(next);
}
