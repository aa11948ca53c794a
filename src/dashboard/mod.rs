pub mod format;
pub mod state;
pub mod widgets;

pub use state::{AppliedSections, ApplyOutcome, Dashboard};
pub use widgets::{BadgeStyle, ChannelPanel, ChartWidget, StatusBadge, ValueLabel};
