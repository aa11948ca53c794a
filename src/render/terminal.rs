//! Plain-text rendering of the dashboard for the console.

use std::fmt::Write;

use crate::dashboard::{format, ChartWidget, Dashboard};
use crate::sensor::Tier;

const SPARK_BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the whole dashboard as a multi-line text frame.
#[must_use]
pub fn render_frame(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "──────────────── Sensor Dashboard ────────────────");
    let _ = writeln!(
        out,
        "Status: {}  {}",
        dashboard.status.text,
        dashboard.last_update.as_deref().unwrap_or("")
    );

    for (channel, panel) in &dashboard.channels {
        let _ = writeln!(
            out,
            "{:<18} {:>10} {:<8} {}",
            panel.chart.label,
            panel.current.text,
            tier_tag(panel.current.tier),
            sparkline(&panel.chart)
        );
        if let (Some(first), Some(last)) = (panel.chart.labels.first(), panel.chart.labels.last()) {
            let _ = writeln!(out, "{:<18} {first} .. {last}", format!("  ({channel})"));
        }
    }

    if !dashboard.alerts.is_empty() {
        let _ = writeln!(out, "Alerts:");
        for alert in &dashboard.alerts {
            let _ = writeln!(out, "  {} [{}] {}", format::alert_marker(alert), alert.level, alert.message);
        }
    }

    out
}

fn tier_tag(tier: Tier) -> &'static str {
    match tier {
        Tier::Normal => "",
        Tier::Warning => "[WARN]",
        Tier::Danger => "[DANGER]",
    }
}

/// One bar per point, scaled to the chart's axis; gaps for non-numeric points.
#[must_use]
pub fn sparkline(chart: &ChartWidget) -> String {
    let points = chart.points();
    let numeric = points.iter().flatten().copied();

    let min = chart
        .axis
        .min
        .unwrap_or_else(|| numeric.clone().fold(f64::INFINITY, f64::min));
    let max = chart
        .axis
        .max
        .unwrap_or_else(|| numeric.fold(f64::NEG_INFINITY, f64::max));
    let span = max - min;

    points
        .iter()
        .map(|point| match point {
            Some(v) if span.is_finite() && span > 0.0 => {
                let ratio = ((v - min) / span).clamp(0.0, 1.0);
                let idx = (ratio * (SPARK_BARS.len() - 1) as f64).round() as usize;
                SPARK_BARS[idx]
            }
            Some(_) => SPARK_BARS[0],
            None => ' ',
        })
        .collect()
}
