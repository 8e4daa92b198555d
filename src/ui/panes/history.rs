//! Run log pane rendering (dataset listings and metric blocks)

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the run log pane
pub fn render_log_pane(frame: &mut Frame, area: Rect, lines: &[String], scroll_offset: &mut usize) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if lines.is_empty() {
        let paragraph = Paragraph::new("(press Enter to sort)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    // Calculate visible range for scrolling
    let total_items = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(line.as_str()).style(line_style(line)))
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

/// Metric lines stand out from the dataset listings
fn line_style(line: &str) -> Style {
    if line.ends_with(" Sort") {
        Style::default().fg(DEFAULT_THEME.primary)
    } else if line.starts_with("Steps: ") {
        Style::default().fg(DEFAULT_THEME.success)
    } else if line.starts_with('[') {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}
