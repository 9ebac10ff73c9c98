//! Status Row Widget
//!
//! Renders one [`StatusRow`] presentation tree into a terminal frame: status
//! icon, normalized path, detail line, and the three fixed action icons.
//! Purely a view of the tree - no payload access happens here.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::icons::IconRenderer;
use crate::render::StatusRow;

const SEPARATOR: &str = " │ ";
const ACTIONS_GAP: &str = "  ";

/// Truncate to at most `max_width` terminal columns
fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in text.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            return &text[..idx];
        }
        width += ch_width;
    }
    text
}

/// Render one status row into `area`
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in (one row high)
/// - `row`: The composed presentation tree for this job
/// - `icons`: Icon renderer (mode + theme)
pub fn render_status_row(f: &mut Frame, area: Rect, row: &StatusRow, icons: &IconRenderer) {
    let icon_span = icons.icon(row.icon);
    let path_span = Span::styled(
        row.info.path.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    let action_spans = [
        icons.icon(row.actions.close),
        icons.icon(row.actions.view),
        icons.icon(row.actions.alternatives),
    ];

    // Detail text gets whatever width is left after icon, path and actions
    let fixed_width = icon_span.content.width()
        + row.info.path.width()
        + SEPARATOR.width()
        + ACTIONS_GAP.width()
        + action_spans
            .iter()
            .map(|s| s.content.width())
            .sum::<usize>();
    let detail_width = (area.width as usize).saturating_sub(fixed_width);
    let detail = truncate_to_width(&row.info.detail, detail_width);

    let mut spans = vec![
        icon_span,
        path_span,
        Span::raw(SEPARATOR),
        Span::styled(detail.to_string(), Style::default().fg(Color::Gray)),
        Span::raw(ACTIONS_GAP),
    ];
    spans.extend(action_spans);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
