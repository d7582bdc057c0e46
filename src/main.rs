mod app;
mod ui;

use std::process::ExitCode;

use life_timeline::io::{prompt_date, read_events_file};
use life_timeline::logging::{init_logging, DEFAULT_LEVEL};
use life_timeline::model::resolve_events;
use life_timeline::{Event, LaunchMode, TimelineConfig, TimelineError};

fn main() -> ExitCode {
    let logger = match init_logging(DEFAULT_LEVEL) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if logger.is_some() {
                log::error!("{}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            show_error_dialog(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), TimelineError> {
    let config = TimelineConfig::load();
    let mode = LaunchMode::from_args(std::env::args_os().skip(1));
    log::info!("Starting in {:?} mode", mode);

    let events = match &mode {
        LaunchMode::File(path) => {
            let report = read_events_file(path)?;
            let (events, dropped) = resolve_events(&config, report.entries);
            if dropped > 0 {
                log::info!("{} events fall outside the timeline and were dropped", dropped);
            }
            if events.is_empty() {
                println!("No valid events found in {}.", path.display());
                return Ok(());
            }
            events
        }
        LaunchMode::Prompt => {
            let date = prompt_date(std::io::stdin().lock(), std::io::stdout())?;
            vec![Event::new(&config, date, "")?]
        }
    };

    let title = mode.window_title();
    let source = match mode {
        LaunchMode::File(path) => Some(path),
        LaunchMode::Prompt => None,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(app::TimelineApp::new(cc, config, events, source)))),
    )
    .map_err(|e| TimelineError::Window(e.to_string()))
}

/// Blocking error dialog for failures that end the run.
fn show_error_dialog(err: &TimelineError) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(format!("An error occurred: {}", err))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
