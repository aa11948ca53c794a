use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::dashboard::format;
use crate::dashboard::widgets::{ChannelPanel, StatusBadge, ValueLabel};
use crate::feed::DataResponse;
use crate::sensor::{classify_measurement, extract_value, sort_alerts, Alert, Channel, Measurement, Tier};

/// All on-screen widgets, constructed once at startup.
///
/// The poller is the only writer; every change goes through [`Dashboard::apply`].
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub status: StatusBadge,
    /// `None` until the server sends a timestamp.
    pub last_update: Option<String>,
    pub channels: BTreeMap<Channel, ChannelPanel>,
    pub alerts: Vec<Alert>,
    /// Sequence number of the last applied payload.
    pub last_seq: Option<u64>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Which sections a payload changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppliedSections {
    pub status: bool,
    pub last_update: bool,
    pub alerts: bool,
    pub channels: Vec<Channel>,
}

impl AppliedSections {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.status && !self.last_update && !self.alerts && self.channels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(AppliedSections),
    /// The payload was issued before the one already shown and was dropped.
    Stale { seq: u64, last_seq: u64 },
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: StatusBadge::default(),
            last_update: None,
            channels: Channel::ALL
                .into_iter()
                .map(|channel| (channel, ChannelPanel::new(channel)))
                .collect(),
            alerts: Vec::new(),
            last_seq: None,
            refreshed_at: None,
        }
    }

    #[must_use]
    pub fn panel(&self, channel: Channel) -> Option<&ChannelPanel> {
        self.channels.get(&channel)
    }

    /// Apply one `/api/data` payload.
    ///
    /// Sections that are absent (or empty) in the payload keep their previous
    /// state. Payloads with a sequence number not newer than the last applied
    /// one are rejected so that an older response can never overwrite a newer one.
    pub fn apply(&mut self, seq: u64, payload: &DataResponse) -> ApplyOutcome {
        if let Some(last_seq) = self.last_seq
            && seq <= last_seq
        {
            return ApplyOutcome::Stale { seq, last_seq };
        }
        self.last_seq = Some(seq);
        self.refreshed_at = Some(Utc::now());

        let mut applied = AppliedSections::default();

        if let Some(timestamp) = payload.last_update.as_deref().filter(|s| !s.is_empty()) {
            self.last_update = Some(format::last_update(timestamp));
            applied.last_update = true;
        }

        if let Some(status) = payload.status.as_deref().filter(|s| !s.is_empty()) {
            self.status = StatusBadge::from_status(status);
            applied.status = true;
        }

        if let Some(alerts) = payload.alerts.as_deref().filter(|a| !a.is_empty()) {
            self.alerts = sort_alerts(alerts);
            applied.alerts = true;
        }

        for channel in Channel::ALL {
            let Some(readings) = payload.series(channel).filter(|r| !r.is_empty()) else {
                continue;
            };

            let labels = readings.iter().map(|r| r.time.clone()).collect();
            let values: Vec<Measurement> =
                readings.iter().map(|r| extract_value(&r.value)).collect();

            let current = values.last();
            let tier = current.map_or(Tier::Normal, |m| classify_measurement(channel, m));
            let label = ValueLabel::new(channel, current, tier);

            let panel = self
                .channels
                .entry(channel)
                .or_insert_with(|| ChannelPanel::new(channel));
            panel.current = label;
            panel.chart.replace(labels, values);
            applied.channels.push(channel);
        }

        ApplyOutcome::Applied(applied)
    }
}
