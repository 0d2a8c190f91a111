//! Replays a recorded editing session and prints the final frame.

use std::path::PathBuf;
use textboard_app::{AppConfig, AppError, Session, load_steps};

fn run() -> Result<(), AppError> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(script) = args.next() else {
        return Err(AppError::Usage);
    };
    let config = match args.next() {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    log::info!("Starting {} ({}x{})", config.title, config.width, config.height);
    let steps = load_steps(&script)?;
    let mut session = Session::new(&config);
    session.run(&steps);

    print!("{}", session.summary());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
