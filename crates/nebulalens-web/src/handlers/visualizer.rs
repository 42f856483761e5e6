//! Visualizer: model profile radar, feature importance and performance bars.

use axum::response::Html;
use nebulalens_common::ChartSeries;

use crate::components::charts::{
    importance_chart_config, performance_chart_config, radar_chart_config, script_json, CHART_JS_SRC,
};
use crate::components::layout::{render_page, Page};

pub async fn visualizer_page() -> Html<String> {
    Html(render_visualizer())
}

pub fn render_visualizer() -> String {
    let body = r#"<h1 class="page-title text-center">Data Visualizer</h1>
<div class="card chart-card"><canvas id="radar-chart"></canvas></div>
<div class="card chart-card">
    <p id="importance-status" class="text-muted text-center">Loading feature importance...</p>
    <canvas id="importance-chart" hidden></canvas>
</div>
<div class="card chart-card"><canvas id="performance-chart"></canvas></div>"#
        .to_string();

    let empty = ChartSeries { labels: Vec::new(), values: Vec::new() };
    // The importance chart starts from an empty template and is filled from
    // /api/feature-importance after the page loads.
    let script = format!(
        r#"new Chart(document.getElementById('radar-chart'), {radar});
new Chart(document.getElementById('performance-chart'), {performance});
(function () {{
    const status = document.getElementById('importance-status');
    const canvas = document.getElementById('importance-chart');
    const config = {importance};
    fetch('/api/feature-importance')
        .then(r => r.json())
        .then(view => {{
            if (view.state === 'ready') {{
                config.data.labels = view.labels;
                config.data.datasets[0].data = view.values;
                status.remove();
                canvas.hidden = false;
                new Chart(canvas, config);
            }} else {{
                status.textContent = view.message;
                status.className = 'error-line text-center';
            }}
        }})
        .catch(() => {{
            status.textContent = 'Failed to fetch feature importance.';
            status.className = 'error-line text-center';
        }});
}})();"#,
        radar = script_json(&radar_chart_config()),
        performance = script_json(&performance_chart_config()),
        importance = script_json(&importance_chart_config(&empty)),
    );

    render_page(Page {
        title: "Visualizer",
        active_path: "/visualizer",
        body,
        script_srcs: &[CHART_JS_SRC],
        script: Some(script),
    })
}
