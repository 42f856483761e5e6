//! Home page: parameter form, performance bars, result card and history.

use axum::{extract::State, response::Html};
use nebulalens_common::{FeatureForm, FieldErrors};

use crate::components::esc;
use crate::components::layout::{render_page, Page};
use crate::components::metrics_card::render_metrics_card;
use crate::components::parameter_form::render_parameter_form;
use crate::components::prediction_log::render_prediction_log;
use crate::components::result_card::render_result_card;
use crate::dashboard::DashboardSnapshot;
use crate::state::SharedState;

/// While a prediction is pending, reload once it settles. The state check
/// covers a completion that lands before the stream connects.
const RELOAD_ON_SETTLE: &str = r#"(function () {
    const events = new EventSource('/api/events');
    const reload = () => { events.close(); window.location.reload(); };
    events.addEventListener('prediction_completed', reload);
    events.addEventListener('prediction_failed', reload);
    events.onopen = () => fetch('/api/state')
        .then(r => r.json())
        .then(s => { if (!s.is_loading) reload(); })
        .catch(() => {});
})();"#;

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let snapshot = state.dashboard.snapshot().await;
    let form = snapshot
        .last_request
        .as_ref()
        .map(FeatureForm::from_features)
        .unwrap_or_default();
    Html(render_home(&snapshot, &form, None, None))
}

/// `errors` are per-field validation messages; `notice` is a page-level
/// message shown instead of the last failure.
pub fn render_home(
    snapshot: &DashboardSnapshot,
    form: &FeatureForm,
    errors: Option<&FieldErrors>,
    notice: Option<&str>,
) -> String {
    let result = snapshot.api_result.as_ref();
    let error_line = notice
        .or(snapshot.last_error.as_deref())
        .map(|msg| format!(r#"<p class="error-line" role="alert">{}</p>"#, esc(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"<section class="hero">
    <h1 class="page-title">NebulaLens: Decoding the Universe with Machine Learning</h1>
    <p class="text-muted">Enter the 6 object parameters to predict its class, or tweak them to explore "what-if" scenarios.</p>
</section>
<div class="grid-2">
    {}
    <div class="d-flex flex-column gap-3">
        {}
        {}
        {}
    </div>
</div>
{}"#,
        render_parameter_form(form, errors, snapshot.is_loading),
        render_metrics_card(result.map(|r| &r.performance), snapshot.is_loading),
        error_line,
        render_result_card(
            result.map(|r| &r.predictions),
            result.map(|r| &r.model_agreement),
            snapshot.is_loading,
        ),
        render_prediction_log(&snapshot.prediction_log),
    );

    render_page(Page {
        title: "Home",
        active_path: "/",
        body,
        script_srcs: &[],
        script: snapshot.is_loading.then(|| RELOAD_ON_SETTLE.to_string()),
    })
}
