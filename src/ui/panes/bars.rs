//! Bar chart pane rendering

use crate::dataset::{max_value, Bar};
use crate::sorting::Algorithm;
use crate::ui::theme::{tint_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar as ChartBar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const BAR_GAP: u16 = 1;

/// Render the dataset as a bar chart.
///
/// Bars keep their own color; positions touched by the latest step get a
/// highlighted marker under them.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    bars: &[Bar],
    touched: &[usize],
    algorithm: Algorithm,
    is_running: bool,
) {
    let border_style = if is_running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} Sort ", algorithm))
        .borders(Borders::ALL)
        .border_style(border_style);

    let count = bars.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(BAR_GAP * (count - 1)) / count).max(1);

    let chart_bars: Vec<ChartBar> = bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            let color = tint_color(bar.color);
            let label = if touched.contains(&index) {
                Line::styled(
                    "▲",
                    Style::default()
                        .fg(DEFAULT_THEME.touched)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(index.to_string(), Style::default().fg(DEFAULT_THEME.comment))
            };

            ChartBar::default()
                .value(u64::from(bar.value))
                .text_value(bar.value.to_string())
                .label(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(u64::from(max_value(bars)).max(1))
        .data(BarGroup::default().bars(&chart_bars));

    frame.render_widget(chart, area);
}
