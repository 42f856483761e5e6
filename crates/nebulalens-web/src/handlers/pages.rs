//! Static informational pages.

use axum::response::Html;
use nebulalens_common::reference::REFERENCE_PERFORMANCE;

use crate::components::layout::{render_page, Page};
use crate::components::metrics_card::percentage;

pub async fn models_page() -> Html<String> {
    let rows: String = REFERENCE_PERFORMANCE
        .iter()
        .map(|model| {
            let m = model.metrics;
            let opt = |v: Option<f64>| v.map(|v| format!("{}%", percentage(v))).unwrap_or_else(|| "n/a".to_string());
            format!(
                r#"<tr><td><strong>{}</strong> <span class="text-muted">({})</span></td><td>{}%</td><td>{}</td><td>{}</td><td>{}%</td></tr>"#,
                model.label,
                model.key,
                percentage(m.accuracy),
                opt(m.precision),
                opt(m.recall),
                percentage(m.f1_score),
            )
        })
        .collect();

    let body = format!(
        r#"<div class="page-header">
    <h1 class="page-title">Models</h1>
    <p class="text-muted">Every prediction is answered by each model below; the consensus is the most common label.</p>
</div>
<div class="card">
    <div class="card-header">Reference Test-Set Performance</div>
    <table class="table">
        <thead><tr><th>Model</th><th>Accuracy</th><th>Precision</th><th>Recall</th><th>F1-Score</th></tr></thead>
        <tbody>{}</tbody>
    </table>
</div>"#,
        rows
    );

    Html(render_page(Page {
        title: "Models",
        active_path: "/models",
        body,
        script_srcs: &[],
        script: None,
    }))
}

pub async fn about_page() -> Html<String> {
    let body = r#"<div class="page-header">
    <h1 class="page-title">About NebulaLens</h1>
</div>
<div class="card">
    <p>NebulaLens classifies astronomical objects from five photometric magnitudes
    (u, g, r, i, z) and their redshift. Several independently trained models vote on
    every request and the dashboard reports how many of them agree.</p>
    <p class="text-muted">History is kept in memory for this server process only.</p>
</div>"#
        .to_string();

    Html(render_page(Page {
        title: "About",
        active_path: "/about",
        body,
        script_srcs: &[],
        script: None,
    }))
}
