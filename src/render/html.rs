//! Server-rendered HTML snapshot of the dashboard.

use std::fmt::Write;

use crate::dashboard::{format, Dashboard};
use crate::render::terminal::sparkline;

/// Render the dashboard as a standalone page that reloads itself every
/// `refresh_secs` seconds.
#[must_use]
pub fn render_page(dashboard: &Dashboard, refresh_secs: u64) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<header><h1>Sensor Dashboard</h1><span id="status-badge" class="{}">{}</span><span id="last-update">{}</span></header>"#,
        dashboard.status.style.css_class(),
        html_escape(&dashboard.status.text),
        html_escape(dashboard.last_update.as_deref().unwrap_or("")),
    );

    body.push_str(r#"<section class="channels">"#);
    for (channel, panel) in &dashboard.channels {
        let _ = write!(
            body,
            r#"<div class="card" id="{channel}-card"><h2>{}</h2><p id="current-{channel}" class="{}">{}</p><pre class="spark">{}</pre><small>{}</small></div>"#,
            html_escape(panel.chart.label),
            panel.current.class,
            html_escape(&panel.current.text),
            sparkline(&panel.chart),
            html_escape(&panel.chart.labels.join(" · ")),
        );
    }
    body.push_str("</section>");

    body.push_str(r#"<section id="alerts-container">"#);
    for alert in &dashboard.alerts {
        let _ = write!(
            body,
            r#"<div class="{}" role="alert">{} <strong>{}</strong></div>"#,
            html_escape(&format::alert_class(alert)),
            format::alert_marker(alert),
            html_escape(&alert.message),
        );
    }
    body.push_str("</section>");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="refresh" content="{refresh_secs}">
    <title>Sensor Dashboard</title>
    <style>
        body {{ font-family: system-ui, sans-serif; background: #f8fafc; color: #1e293b; margin: 1.5rem; }}
        .card {{ background: #fff; border: 1px solid #e2e8f0; border-radius: 0.5rem; padding: 1rem; margin-bottom: 0.75rem; }}
        .badge {{ padding: 0.2rem 0.6rem; border-radius: 0.375rem; color: #fff; margin: 0 1rem; }}
        .bg-success {{ background: #198754; }}
        .bg-danger {{ background: #dc3545; }}
        .bg-secondary {{ background: #6c757d; }}
        .text-warning {{ color: #b58100; }}
        .text-danger {{ color: #dc3545; }}
        .alert {{ padding: 0.5rem 1rem; border-radius: 0.375rem; margin-bottom: 0.5rem; background: #fff3cd; }}
        .alert-danger {{ background: #f8d7da; }}
        .spark {{ font-size: 1.5rem; margin: 0.25rem 0; }}
    </style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
