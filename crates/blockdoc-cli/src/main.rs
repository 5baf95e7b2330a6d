use anyhow::{Context, Result};
use blockdoc_config::Config;
use blockdoc_engine::render::html::to_html;
use blockdoc_engine::{Document, extract_outline, io, render_document};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::path::{Path, PathBuf};
use std::{env, fs, process};

mod app;
mod text_render;
mod ui;
mod viewport;

use app::{App, Focus};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("blockdoc-cli");

    match args.get(1).map(String::as_str) {
        Some("--html") => return print_html(&document_arg(&args, program)?),
        Some("--outline") => return print_outline(&document_arg(&args, program)?),
        _ => {}
    }

    let config_path = Config::config_path();

    let documents_path;
    let from_config;

    if args.len() == 2 {
        documents_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                documents_path = config.documents_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No documents path provided and no config file found");
                print_usage(program);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                print_usage(program);
                process::exit(1);
            }
        }
    } else {
        print_usage(program);
        process::exit(1);
    };

    if let Err(e) = io::validate_documents_dir(&documents_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Documents path '{}'{} is invalid: {e}",
            documents_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(documents_path)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [documents-folder-path]");
    eprintln!("       {program} --html <document.json>");
    eprintln!("       {program} --outline <document.json>");
}

fn document_arg(args: &[String], program: &str) -> Result<PathBuf> {
    match args.get(2) {
        Some(path) if args.len() == 3 => Ok(PathBuf::from(path)),
        _ => anyhow::bail!("Usage: {program} {} <document.json>", args[1]),
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Document::from_json_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_html(path: &Path) -> Result<()> {
    let document = load_document(path)?;
    println!("{}", to_html(&render_document(&document)));
    Ok(())
}

fn print_outline(path: &Path) -> Result<()> {
    let document = load_document(path)?;
    println!("{}", serde_json::to_string_pretty(&extract_outline(&document))?);
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.toggle_focus(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Enter if app.focus == Focus::Outline => app.activate_outline_entry(),
                KeyCode::PageDown => app.scroll_by(page(app)),
                KeyCode::PageUp => app.scroll_by(-page(app)),
                _ => {}
            }
        }
    }
}

fn page(app: &App) -> isize {
    isize::try_from(app.viewport_height.max(1)).unwrap_or(isize::MAX)
}
