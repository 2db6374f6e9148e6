mod app;
mod data;
mod paths;
mod settings;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use luterm::Terminal;
use lutable::{Row, Table, TableConfig, TableError, TableOptions, ThemeHandle, ThemeMode};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::app::Demo;
use crate::data::DataError;
use crate::settings::{SettingsError, SettingsProvider, SqliteBackend, THEME_KEY};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Archived log files kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

/// Interactive sortable table.
#[derive(Debug, Parser)]
#[command(name = "lu-demo", version)]
struct Args {
    /// JSON file with optional `options` and `rows` keys
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Start in this theme instead of the saved one (light or dark)
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Start with the loading overlay shown
    #[arg(long)]
    loading: bool,

    /// Draw column separators and row rules
    #[arg(long)]
    bordered: bool,

    /// Disable alternate row backgrounds
    #[arg(long)]
    no_stripes: bool,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Table(#[from] TableError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let Some(dir) = paths::cache_dir() else { return };
    let path = match paths::rotate_logs(&dir, MAX_OLD_LOGS) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("warning: cannot rotate logs in {}: {e}", dir.display());
            return;
        }
    };

    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("warning: cannot create {}: {e}", path.display()),
    }
}

fn open_settings() -> Result<SettingsProvider, DemoError> {
    let backend = match paths::settings_db() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            SqliteBackend::open(&path)?
        }
        None => {
            log::warn!("[settings] no data directory, settings will not persist");
            SqliteBackend::in_memory()?
        }
    };
    Ok(SettingsProvider::new(backend))
}

fn run(args: Args) -> Result<(), DemoError> {
    let settings = open_settings()?;
    let saved = settings.get_or(THEME_KEY, ThemeMode::default())?;
    let theme = ThemeHandle::new(args.theme.unwrap_or(saved));

    let (config, rows) = match &args.data {
        Some(path) => {
            let file = data::load(path)?;
            (file.options, file.rows)
        }
        None => (TableConfig::default(), data::sample_rows()),
    };

    let mut options: TableOptions<Row> = config.into();
    options.loading |= args.loading;
    options.bordered |= args.bordered;
    options.striped &= !args.no_stripes;

    let table = Table::new(data::columns())?.with_options(options);
    log::info!("[demo] starting with {} rows, theme {}", rows.len(), theme.get());

    let mut demo = Demo::new(table, rows, theme.clone());
    let mut terminal = Terminal::new()?;
    let mut redraw = true;

    while !demo.should_quit() {
        if redraw {
            terminal.draw(|buf| demo.draw(buf))?;
            redraw = false;
        }

        for event in terminal.poll(POLL_INTERVAL)? {
            redraw |= demo.handle(&event);
        }

        if theme.is_dirty() {
            match settings.set(THEME_KEY, &theme.get()) {
                Ok(()) => log::debug!("[settings] saved {THEME_KEY} = {}", theme.get()),
                Err(e) => log::warn!("[settings] failed to save {THEME_KEY}: {e}"),
            }
            theme.clear_dirty();
        }
    }

    log::info!("[demo] exiting");
    Ok(())
}
