//! Main TUI application state and logic

use crate::config::{clamp_delay, Config, DELAY_STEP_MS};
use crate::dataset::{values_of, Bar, Preset};
use crate::instrument::StepEvent;
use crate::runner::{Orchestrator, RunHandle, RunReport, RunRequest};
use crate::sorting::Algorithm;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Longest the event loop waits for input before polling the run again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Oldest log lines are dropped past this many
pub const LOG_CAPACITY: usize = 500;

/// The main application state
pub struct App {
    /// Starts runs and keeps them from overlapping
    pub orchestrator: Orchestrator,

    /// Source for the random presets
    pub rng: StdRng,

    pub algorithm: Algorithm,
    pub preset: Preset,
    pub delay_ms: u64,

    /// What the chart shows: the dataset as of the last replayed step
    pub bars: Vec<Bar>,

    /// Positions touched by the last replayed step
    pub touched: Vec<usize>,

    /// Step number of the last replayed step
    pub shown_steps: u64,

    /// Live counter value read from the running sort
    pub live_steps: u64,

    /// The in-flight run, if any
    pub run: Option<RunHandle>,

    /// Last time a step was replayed
    pub last_step_time: Instant,

    /// Log pane contents
    pub log_lines: Vec<String>,
    pub log_scroll: usize,

    /// Latest report per algorithm
    pub scoreboard: FxHashMap<Algorithm, RunReport>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app from the command-line configuration
    pub fn new(config: &Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bars = config.preset.generate(&mut rng);

        App {
            orchestrator: Orchestrator::new(),
            rng,
            algorithm: config.algorithm,
            preset: config.preset,
            delay_ms: clamp_delay(config.delay),
            bars,
            touched: Vec::new(),
            shown_steps: 0,
            live_steps: 0,
            run: None,
            last_step_time: Instant::now(),
            log_lines: Vec::new(),
            log_scroll: 0,
            scoreboard: FxHashMap::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.tick();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let timeout = if self.is_running() && self.delay_ms > 0 {
                POLL_INTERVAL.min(Duration::from_millis(self.delay_ms))
            } else {
                POLL_INTERVAL
            };

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Regenerate the dataset for the current preset
    pub fn regenerate(&mut self) {
        self.bars = self.preset.generate(&mut self.rng);
        self.touched.clear();
        self.shown_steps = 0;
        self.live_steps = 0;
    }

    /// Start sorting the displayed dataset with the selected algorithm
    pub fn start_run(&mut self) {
        let request = RunRequest {
            algorithm: self.algorithm,
            preset: self.preset,
            delay_ms: self.delay_ms,
            data: self.bars.clone(),
        };

        match self.orchestrator.start(request) {
            Ok(handle) => {
                self.append_log([
                    format!("{} Values", self.preset),
                    format!("{:?}", values_of(&self.bars)),
                    String::new(),
                    format!("{} Sort", self.algorithm),
                ]);

                self.run = Some(handle);
                self.touched.clear();
                self.shown_steps = 0;
                self.live_steps = 0;
                self.last_step_time = Instant::now();
                self.status_message = format!("Sorting with {}...", self.algorithm);
            }
            Err(e) => {
                self.status_message = format!("Cannot start: {}", e);
            }
        }
    }

    /// Poll the in-flight run: read the counter, replay due steps, and
    /// collect the report once every step has been shown
    pub fn tick(&mut self) {
        let (live_steps, due) = match self.run.as_ref() {
            Some(run) => {
                let due = if self.delay_ms == 0 {
                    run.drain_events()
                } else {
                    let delay = Duration::from_millis(self.delay_ms);
                    let mut due = Vec::new();
                    while self.last_step_time.elapsed() >= delay {
                        match run.try_next_event() {
                            Some(event) => due.push(event),
                            None => break,
                        }
                        self.last_step_time += delay;
                    }
                    due
                };
                (run.steps(), due)
            }
            None => return,
        };

        self.live_steps = live_steps;
        for event in due {
            self.replay(&event);
        }

        let done = self
            .run
            .as_ref()
            .is_some_and(|run| run.is_finished() && run.pending_events() == 0);
        if done {
            self.finish_run();
        }
    }

    /// Append to the log pane, keep at most [`LOG_CAPACITY`] lines and
    /// scroll to the bottom
    fn append_log(&mut self, lines: impl IntoIterator<Item = String>) {
        self.log_lines.extend(lines);
        if self.log_lines.len() > LOG_CAPACITY {
            let excess = self.log_lines.len() - LOG_CAPACITY;
            self.log_lines.drain(..excess);
        }
        self.log_scroll = usize::MAX;
    }

    fn replay(&mut self, event: &StepEvent) {
        event.apply(&mut self.bars);
        self.touched = event.placements().map(|p| p.index).collect();
        self.shown_steps = event.step;
    }

    fn finish_run(&mut self) {
        let Some(handle) = self.run.take() else {
            return;
        };
        for event in handle.drain_events() {
            self.replay(&event);
        }

        match handle.join() {
            Ok(report) => {
                if self.bars != report.data {
                    log::warn!("replayed chart diverged from the sorted data; resyncing");
                    self.bars = report.data.clone();
                }
                self.touched.clear();
                self.live_steps = report.steps;
                self.shown_steps = report.steps;

                let summary = report.summary();
                self.append_log(
                    summary
                        .lines()
                        .map(str::to_string)
                        .chain(std::iter::once(String::new())),
                );

                self.status_message = format!(
                    "{} finished in {} steps",
                    report.algorithm, report.steps
                );
                self.scoreboard.insert(report.algorithm, report);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, log and scoreboard below, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(60),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);

        super::panes::render_bars_pane(
            frame,
            main_chunks[0],
            &self.bars,
            &self.touched,
            self.algorithm,
            self.is_running(),
        );

        super::panes::render_log_pane(frame, lower[0], &self.log_lines, &mut self.log_scroll);

        super::panes::render_scoreboard_pane(frame, lower[1], &self.scoreboard, self.algorithm);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                algorithm: self.algorithm,
                preset: self.preset,
                delay_ms: self.delay_ms,
                shown_steps: self.shown_steps,
                live_steps: self.live_steps,
                is_running: self.is_running(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Pacing stays adjustable while a sort is on screen
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.delay_ms = clamp_delay(self.delay_ms.saturating_add(DELAY_STEP_MS));
                self.status_message = format!("Delay {} ms", self.delay_ms);
            }
            KeyCode::Char('-') => {
                self.delay_ms = self.delay_ms.saturating_sub(DELAY_STEP_MS);
                self.status_message = format!("Delay {} ms", self.delay_ms);
            }
            _ if self.is_running() => {
                self.status_message = "Sorting... controls unlock when it finishes".to_string();
            }
            KeyCode::Left => {
                self.algorithm = self.algorithm.prev();
                self.status_message = format!("{} selected", self.algorithm);
            }
            KeyCode::Right => {
                self.algorithm = self.algorithm.next();
                self.status_message = format!("{} selected", self.algorithm);
            }
            KeyCode::Up => {
                self.preset = self.preset.prev();
                self.regenerate();
                self.status_message = format!("{} values", self.preset);
            }
            KeyCode::Down => {
                self.preset = self.preset.next();
                self.regenerate();
                self.status_message = format!("{} values", self.preset);
            }
            KeyCode::Char('r') => {
                self.regenerate();
                self.status_message = format!("New {} values", self.preset);
            }
            KeyCode::Char('c') => {
                self.log_lines.clear();
                self.log_scroll = 0;
                self.status_message = "Log cleared".to_string();
            }
            KeyCode::PageUp => {
                self.log_scroll = self.log_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.log_scroll = self.log_scroll.saturating_add(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.start_run();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::is_sorted_range;
    use crossterm::event::KeyModifiers;
    use std::thread;

    fn config(algorithm: Algorithm, preset: Preset, delay: u64) -> Config {
        Config {
            algorithm,
            preset,
            delay,
            seed: Some(3),
            headless: false,
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn tick_until_idle(app: &mut App) {
        for _ in 0..2000 {
            app.tick();
            if !app.is_running() {
                return;
            }
            thread::sleep(Duration::from_millis(1));
        }
        panic!("run never finished");
    }

    #[test]
    fn test_run_replays_to_sorted_chart() {
        let mut app = App::new(&config(Algorithm::Merge, Preset::Reverse, 0));
        app.start_run();
        assert!(app.is_running());

        tick_until_idle(&mut app);

        assert_eq!(app.bars.len(), 10);
        assert!(is_sorted_range(&app.bars, 0, 9));
        assert_eq!(app.shown_steps, app.live_steps);
        assert!(app.shown_steps > 0);
        assert!(app.scoreboard.contains_key(&Algorithm::Merge));
        assert!(app.log_lines.iter().any(|l| l == "Reverse Values"));
        assert!(app.log_lines.iter().any(|l| l.starts_with("Steps: ")));
    }

    #[test]
    fn test_controls_locked_while_running() {
        let mut app = App::new(&config(Algorithm::Bubble, Preset::Reverse, 5));
        app.start_run();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.algorithm, Algorithm::Bubble);
        assert_eq!(app.delay_ms, 15);

        app.delay_ms = 0;
        tick_until_idle(&mut app);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.algorithm, Algorithm::Selection);
    }

    #[test]
    fn test_preset_keys_regenerate() {
        let mut app = App::new(&config(Algorithm::Heap, Preset::Reverse, 50));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.preset, Preset::Hundreds);
        assert!(app.bars.iter().all(|b| (100..1000).contains(&b.value)));

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.preset, Preset::Ordered);
        assert!(is_sorted_range(&app.bars, 0, 9));
    }

    #[test]
    fn test_log_keeps_latest_lines() {
        let mut app = App::new(&config(Algorithm::Quick, Preset::Ordered, 0));
        app.log_lines = (0..LOG_CAPACITY).map(|i| format!("old {}", i)).collect();

        app.start_run();
        tick_until_idle(&mut app);

        assert_eq!(app.log_lines.len(), LOG_CAPACITY);
        assert!(!app.log_lines.iter().any(|l| l == "old 0"));
        assert!(app.log_lines.iter().any(|l| l == "Ordered Values"));
        assert!(app.log_lines.iter().any(|l| l.starts_with("Steps: ")));
        assert_eq!(app.log_lines.last().map(String::as_str), Some(""));
    }
}
