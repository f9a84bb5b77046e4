//! marginalia: a markdown reader with a scroll-tracked table of contents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use marginalia::app_state::{self, AppState, Focus, View};
use marginalia::components::HtmlComponents;
use marginalia::config::Config;
use marginalia::document::Document;
use marginalia::formats::markdown::MarkdownFormat;
use marginalia::logging::{init_logging, LogTarget};
use marginalia::outline::OutlineNode;
use marginalia::{html, input, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "marginalia")]
#[command(about = "Table of contents and scroll-tracked outlines for markdown", long_about = None)]
struct Args {
    /// Files or directories to read
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print each document's front matter and outline as JSON and exit
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Print each document's table of contents and anchored headings as HTML and exit
    #[arg(long)]
    html: bool,

    /// Deepest table of contents level shown
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Shallowest heading rank included
    #[arg(long, value_name = "N")]
    min_level: Option<usize>,

    /// Deepest heading rank included
    #[arg(long, value_name = "N")]
    max_level: Option<usize>,

    /// Fraction of the viewport excluded from the top of the trigger band
    #[arg(long, value_name = "FRACTION")]
    band_top: Option<f64>,

    /// Fraction of the viewport excluded from the bottom of the trigger band
    #[arg(long, value_name = "FRACTION")]
    band_bottom: Option<f64>,

    /// Write logs to this file (the reader never logs to the terminal)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct DocumentDump<'a> {
    path: String,
    title: String,
    front_matter: &'a marginalia::document::FrontMatter,
    outline: &'a [OutlineNode],
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let interactive = !args.json && !args.html;

    let target = match (&args.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, false) => LogTarget::Stderr,
        (None, true) => LogTarget::Off,
    };
    init_logging(&target, args.verbose)?;

    let mut cfg = Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }
    if let Some(depth) = args.max_depth {
        cfg.max_depth = depth;
    }
    if let Some(level) = args.min_level {
        cfg.min_level = level;
    }
    if let Some(level) = args.max_level {
        cfg.max_level = level;
    }
    if let Some(top) = args.band_top {
        cfg.band_top = top;
    }
    if let Some(bottom) = args.band_bottom {
        cfg.band_bottom = bottom;
    }
    let band = cfg
        .band()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    let documents = input::find_documents(paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    if args.json {
        return print_json(&documents, &cfg);
    }
    if args.html {
        print_html(&documents, &cfg);
        return Ok(());
    }

    let mut state = AppState::new(documents, &cfg, band);
    if state.file_mode == app_state::FileMode::Single {
        state.open_current();
    }
    run_tui(state)
}

fn load_all(documents: &[PathBuf]) -> Vec<Document> {
    documents
        .iter()
        .filter_map(|path| match Document::load(path, &MarkdownFormat) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping document");
                None
            }
        })
        .collect()
}

fn print_json(documents: &[PathBuf], cfg: &Config) -> io::Result<()> {
    let docs = load_all(documents);
    let outlines: Vec<Vec<OutlineNode>> = docs
        .iter()
        .map(|doc| doc.outline(cfg.outline_options()))
        .collect();
    let dumps: Vec<DocumentDump> = docs
        .iter()
        .zip(&outlines)
        .map(|(doc, outline)| DocumentDump {
            path: doc.path.display().to_string(),
            title: doc.title(),
            front_matter: &doc.front_matter,
            outline,
        })
        .collect();
    let json = serde_json::to_string_pretty(&dumps).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn print_html(documents: &[PathBuf], cfg: &Config) {
    let components = HtmlComponents::default();
    let renderer = cfg.renderer();
    for doc in load_all(documents) {
        let outline = doc.outline(cfg.outline_options());
        let items = renderer.render_document(&outline, None);
        println!("<!-- {} -->", doc.path.display());
        println!("<nav class=\"toc\">");
        print!("{}", html::render_toc(&items, &components));
        println!("</nav>");
        print!("{}", html::render_headings(&outline, &components));
    }
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    app.close_reader();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        app.message = None;

        match app.current_view {
            View::FileList => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.move_file_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => app.move_file_selection(1),
                KeyCode::Enter => app.open_current(),
                _ => {}
            },
            View::Reader => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    if app.back() {
                        return Ok(());
                    }
                    continue;
                }
                if key.code == KeyCode::Tab {
                    app.toggle_focus();
                    continue;
                }
                if key.code == KeyCode::Enter {
                    app.navigate_selected();
                    continue;
                }

                let focus = app.focus;
                let Some(reader) = app.reader.as_mut() else {
                    continue;
                };
                let page = isize::try_from(reader.tracker.surface().height() / 2)
                    .unwrap_or(isize::MAX)
                    .max(1);
                match (focus, key.code) {
                    (Focus::Document, KeyCode::Up | KeyCode::Char('k')) => reader.scroll_by(-1),
                    (Focus::Document, KeyCode::Down | KeyCode::Char('j')) => reader.scroll_by(1),
                    (Focus::Contents, KeyCode::Up | KeyCode::Char('k')) => reader.move_selection(-1),
                    (Focus::Contents, KeyCode::Down | KeyCode::Char('j')) => reader.move_selection(1),
                    (_, KeyCode::PageUp) => reader.scroll_by(-page),
                    (_, KeyCode::PageDown) => reader.scroll_by(page),
                    (_, KeyCode::Char('g') | KeyCode::Home) => reader.scroll_to(0),
                    (_, KeyCode::Char('G') | KeyCode::End) => {
                        reader.scroll_to(reader.tracker.surface().total_lines());
                    }
                    _ => {}
                }
            }
        }
    }
}
