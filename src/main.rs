//! paragraph-view - print the demo root view.
//!
//! Configuration comes from the environment (see [`paragraph_view::config`]);
//! logging is controlled with `RUST_LOG`.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use paragraph_view::{AppView, LineRenderer, Result, ViewConfig};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("paragraph-view: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = ViewConfig::from_env()?;

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();

    // Fall back to the terminal width, as long as there is a terminal.
    let wrap_width = config.wrap_width.map(usize::from).or_else(|| {
        if is_terminal {
            crossterm::terminal::size().ok().map(|(width, _)| usize::from(width))
        } else {
            None
        }
    });

    let app = AppView::new(config.template);
    let mut renderer = LineRenderer::new(config.color.enabled(is_terminal), wrap_width);
    renderer.render(&app.lines(), &mut stdout.lock())?;
    Ok(())
}
