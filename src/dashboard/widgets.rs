use serde::Serialize;

use crate::dashboard::format;
use crate::sensor::{AxisRange, Channel, Measurement, Tier};

/// Connectivity badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Success,
    Danger,
    Secondary,
}

impl BadgeStyle {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "badge bg-success",
            Self::Danger => "badge bg-danger",
            Self::Secondary => "badge bg-secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBadge {
    pub text: String,
    pub style: BadgeStyle,
}

impl StatusBadge {
    /// The raw status string is shown as-is; only the style is derived from it.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        let style = match status {
            "online" => BadgeStyle::Success,
            "offline" => BadgeStyle::Danger,
            _ => BadgeStyle::Secondary,
        };
        Self {
            text: status.to_string(),
            style,
        }
    }
}

impl Default for StatusBadge {
    fn default() -> Self {
        Self {
            text: "unknown".to_string(),
            style: BadgeStyle::Secondary,
        }
    }
}

/// Line chart for one channel: parallel label and data sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartWidget {
    pub label: &'static str,
    pub axis: AxisRange,
    pub labels: Vec<String>,
    pub data: Vec<Measurement>,
    /// Number of redraws since startup.
    pub redraws: u64,
}

impl ChartWidget {
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            label: channel.chart_label(),
            axis: channel.axis_range(),
            labels: Vec::new(),
            data: Vec::new(),
            redraws: 0,
        }
    }

    /// Replace both sequences and redraw.
    pub fn replace(&mut self, labels: Vec<String>, data: Vec<Measurement>) {
        self.labels = labels;
        self.data = data;
        self.redraws += 1;
    }

    /// Numeric view of the data; unresolved points become gaps.
    #[must_use]
    pub fn points(&self) -> Vec<Option<f64>> {
        self.data.iter().map(Measurement::as_f64).collect()
    }
}

/// Current-value label with its emphasis tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueLabel {
    pub text: String,
    pub tier: Tier,
    pub class: &'static str,
}

impl ValueLabel {
    #[must_use]
    pub fn new(channel: Channel, current: Option<&Measurement>, tier: Tier) -> Self {
        Self {
            text: format::current_value(channel, current),
            tier,
            class: tier.css_class(),
        }
    }
}

impl Default for ValueLabel {
    fn default() -> Self {
        Self {
            text: format::PLACEHOLDER.to_string(),
            tier: Tier::Normal,
            class: Tier::Normal.css_class(),
        }
    }
}

/// Everything shown for one channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelPanel {
    pub chart: ChartWidget,
    pub current: ValueLabel,
}

impl ChannelPanel {
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self {
            chart: ChartWidget::new(channel),
            current: ValueLabel::default(),
        }
    }
}
