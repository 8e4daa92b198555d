// SorTTY: Step-by-Step Sorting Visualizer

use std::io;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::Config;
use sortty::dataset::values_of;
use sortty::runner::{Orchestrator, RunRequest};
use sortty::ui::App;

fn main() -> anyhow::Result<()> {
    use env_logger::{Builder, Env};

    // Anything chattier than warn would scribble over the TUI
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::parse();

    if config.headless {
        return run_headless(&config);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Sort once without the UI and print what the log pane would show
fn run_headless(config: &Config) -> anyhow::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let data = config.preset.generate(&mut rng);

    println!("{} Values", config.preset);
    println!("{:?}", values_of(&data));
    println!();
    println!("{} Sort", config.algorithm);

    let report = Orchestrator::new()
        .run_blocking(RunRequest {
            algorithm: config.algorithm,
            preset: config.preset,
            delay_ms: config.delay,
            data,
        })
        .with_context(|| format!("{} sort failed", config.algorithm))?;

    println!("{:?}", values_of(&report.data));
    print!("{}", report.summary());
    Ok(())
}
