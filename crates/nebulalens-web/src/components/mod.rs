//! Pure HTML renderers. Each takes read-only data and returns markup; none
//! of them touch state or the network.

pub mod layout;
pub mod nav;
pub mod parameter_form;
pub mod metrics_card;
pub mod result_card;
pub mod prediction_log;
pub mod charts;

use minijinja::HtmlEscape;

/// Escape text that came from the classifier or the user.
pub(crate) fn esc(text: &str) -> HtmlEscape<'_> {
    HtmlEscape(text)
}
