//! Scoreboard pane: the latest result for every algorithm run so far

use crate::runner::RunReport;
use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use rustc_hash::FxHashMap;

/// Render one row per catalog entry, in catalog order
pub fn render_scoreboard_pane(
    frame: &mut Frame,
    area: Rect,
    scoreboard: &FxHashMap<Algorithm, RunReport>,
    selected: Algorithm,
) {
    let block = Block::default()
        .title(" Scoreboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let header = Row::new(["Algorithm", "Preset", "Steps", "Speed"]).style(
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let name_style = if algorithm == selected {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            match scoreboard.get(&algorithm) {
                Some(report) => Row::new([
                    Cell::from(algorithm.name()).style(name_style),
                    Cell::from(report.preset.name()),
                    Cell::from(report.steps.to_string())
                        .style(Style::default().fg(DEFAULT_THEME.number)),
                    Cell::from(format!("{} ns", report.elapsed.as_nanos())),
                ]),
                None => Row::new([
                    Cell::from(algorithm.name()).style(name_style),
                    Cell::from("-").style(Style::default().fg(DEFAULT_THEME.comment)),
                    Cell::from("-").style(Style::default().fg(DEFAULT_THEME.comment)),
                    Cell::from("-").style(Style::default().fg(DEFAULT_THEME.comment)),
                ]),
            }
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));

    frame.render_widget(table, area);
}
