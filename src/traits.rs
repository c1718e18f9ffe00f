use crate::types::PlaceholderRange;

/// Host-side display for an amount editor.
///
/// Implemented by whatever renders the amount (a label, a terminal widget,
/// a test recorder). The editor pushes the full formatted string together
/// with the filler range the host should render muted.
pub trait AmountView {
    fn render(&mut self, formatted: &str, placeholder: Option<PlaceholderRange>);
}
