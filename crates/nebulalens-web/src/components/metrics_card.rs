//! Per-model accuracy / F1 bars.

use nebulalens_common::prediction::placeholder_performance;
use nebulalens_common::{ModelMetrics, OrderedMap};

use super::esc;

/// `0.973 -> "97.3"`
pub fn percentage(value: f64) -> String {
    format!("{:.1}", value * 100.0)
}

fn metric_bar(label: &str, value: f64, accent: &str) -> String {
    let pct = percentage(value);
    let width = (value * 100.0).clamp(0.0, 100.0);
    format!(
        r#"<div class="metric-bar">
                <div class="d-flex justify-between"><span class="text-muted">{}</span><span class="metric-pct">{}%</span></div>
                <div class="progress-track"><div class="progress-bar {}" style="width:{:.1}%"></div></div>
            </div>"#,
        label, pct, accent, width
    )
}

/// `performance` of `None` (or an empty mapping) shows the all-zero placeholder.
pub fn render_metrics_card(performance: Option<&OrderedMap<ModelMetrics>>, is_loading: bool) -> String {
    let body = if is_loading {
        r#"<p class="text-muted text-center">Loading...</p>"#.to_string()
    } else {
        let placeholder;
        let data = match performance.filter(|p| !p.is_empty()) {
            Some(p) => p,
            None => {
                placeholder = placeholder_performance();
                &placeholder
            }
        };
        let models: String = data
            .iter()
            .map(|(model, metrics)| {
                format!(
                    r#"
        <div class="model-metrics">
            <h3 class="model-name">{}</h3>
            {}
            {}
        </div>"#,
                    esc(&model.to_uppercase()),
                    metric_bar("Accuracy", metrics.accuracy, "accent"),
                    metric_bar("F1-Score", metrics.f1_score, "blue"),
                )
            })
            .collect();
        format!(r#"<div class="metrics-list">{}</div>"#, models)
    };

    format!(
        r#"<div class="card" id="metrics-card">
    <div class="card-header">Model Performance (on Test Set)</div>
    {}
</div>"#,
        body
    )
}
