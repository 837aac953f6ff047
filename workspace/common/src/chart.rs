//! Status donut chart and legend.
//!
//! Everything here is a pure function of the dashboard summary: the slices in
//! display order, the Plotly trace and layout payloads, and the tinted legend
//! colors. Drawing is left to Plotly in the browser.

use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::model::DashboardSummary;
use crate::status::DashboardStatus;

/// Inner cutout radius relative to the outer radius
pub const HOLE_RATIO: f64 = 0.8;
pub const CENTER_CAPTION: &str = "전체 캠페인";

const LEGEND_FILL_ALPHA: f32 = 0.1;
const LEGEND_BORDER_ALPHA: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSlice {
    pub status: DashboardStatus,
    pub label: &'static str,
    pub color: &'static str,
    pub count: u64,
}

impl StatusSlice {
    pub fn background(&self) -> String {
        tint(self.color, LEGEND_FILL_ALPHA)
    }

    pub fn border(&self) -> String {
        tint(self.color, LEGEND_BORDER_ALPHA)
    }
}

/// Slices for every known status, in display order, with absent counts as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub total: u64,
    pub slices: Vec<StatusSlice>,
}

impl StatusBreakdown {
    pub fn new(total: u64, counts: &BTreeMap<String, u64>) -> Self {
        Self::from_summary(&DashboardSummary {
            total_campaigns: total,
            status_counts: counts.clone(),
        })
    }

    pub fn from_summary(summary: &DashboardSummary) -> Self {
        let slices = DashboardStatus::DISPLAY_ORDER
            .into_iter()
            .map(|status| StatusSlice {
                status,
                label: status.label(),
                color: status.color(),
                count: summary.count_for(status),
            })
            .collect();

        let ignored: Vec<&String> = summary
            .status_counts
            .keys()
            .filter(|code| DashboardStatus::from_code(code).is_none())
            .collect();
        if !ignored.is_empty() {
            log::trace!("Ignoring unknown status keys in summary: {:?}", ignored);
        }

        Self {
            total: summary.total_campaigns,
            slices,
        }
    }

    /// Plotly pie trace rendered as a ring
    pub fn trace(&self) -> Value {
        let labels: Vec<&str> = self.slices.iter().map(|s| s.label).collect();
        let values: Vec<u64> = self.slices.iter().map(|s| s.count).collect();
        let colors: Vec<&str> = self.slices.iter().map(|s| s.color).collect();

        json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "marker": {"colors": colors},
            "hole": HOLE_RATIO,
            "sort": false,
            "direction": "clockwise",
            "textinfo": "none",
            "hoverinfo": "label+value",
            "domain": {"x": [0.0, 1.0], "y": [0.0, 1.0]}
        })
    }

    /// Layout without the built-in legend, carrying the center overlay if any
    pub fn layout(&self, overlay: Option<Vec<Value>>) -> Value {
        json!({
            "showlegend": false,
            "margin": {"t": 0, "r": 0, "l": 0, "b": 0},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "annotations": overlay.unwrap_or_default()
        })
    }
}

pub fn chart_config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

/// Center of the ring in paper coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center_x: f64,
    pub center_y: f64,
}

impl ChartGeometry {
    /// Reads the slice domain from a pie trace. `None` if it is missing or
    /// malformed.
    pub fn from_trace(trace: &Value) -> Option<Self> {
        let domain = trace.get("domain")?;
        let (x0, x1) = bounds(domain.get("x")?)?;
        let (y0, y1) = bounds(domain.get("y")?)?;

        Some(Self {
            center_x: (x0 + x1) / 2.0,
            center_y: (y0 + y1) / 2.0,
        })
    }
}

fn bounds(axis: &Value) -> Option<(f64, f64)> {
    match axis.as_array()?.as_slice() {
        [lo, hi] => Some((lo.as_f64()?, hi.as_f64()?)),
        _ => None,
    }
}

/// Total count and caption drawn inside the cutout.
///
/// Without geometry there is nothing to anchor to and the overlay is skipped.
pub fn center_overlay(total: u64, geometry: Option<&ChartGeometry>) -> Option<Vec<Value>> {
    let geometry = geometry?;

    Some(vec![
        json!({
            "text": format!("<b>{}</b>", total),
            "x": geometry.center_x,
            "y": geometry.center_y + 0.05,
            "xref": "paper",
            "yref": "paper",
            "showarrow": false,
            "font": {"size": 32, "color": "#111827"}
        }),
        json!({
            "text": CENTER_CAPTION,
            "x": geometry.center_x,
            "y": geometry.center_y - 0.08,
            "xref": "paper",
            "yref": "paper",
            "showarrow": false,
            "font": {"size": 13, "color": "#6B7280"}
        }),
    ])
}

/// Same hue as `hex` (`#RRGGBB`) at the given opacity, as a CSS `rgba()`.
/// Colors that do not parse are returned unchanged.
pub fn tint(hex: &str, alpha: f32) -> String {
    let rgb = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6 && digits.is_ascii())
        .and_then(|digits| {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        });

    match rgb {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        None => hex.to_string(),
    }
}
