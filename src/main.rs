use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{eyre, WrapErr};

mod app;
mod catalog;
mod interpreter;
mod logging;
mod profile;
mod sections;
mod session;
mod typing;
mod ui;
mod widgets;

use app::{Action, App};
use catalog::MemCatalog;
use interpreter::CommandTable;
use session::TerminalSession;

/// A personal portfolio in a simulated terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Section to open first (any command, e.g. "papers")
    #[arg(long)]
    section: Option<String>,

    /// JSON file with projects and publications (built-in sample if omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write tracing output to this file (RUST_LOG filters, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Animation tick in milliseconds
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Print the catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,

    /// Print a usage definition of this CLI (for shell completions) and exit
    #[arg(long)]
    usage: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Handle --usage flag to output the CLI definition
    if args.usage {
        let mut cmd = Args::command();
        let bin_name = std::env::args()
            .next()
            .unwrap_or_else(|| "termfolio".to_string());
        let mut buf = Vec::new();
        clap_usage::generate(&mut cmd, bin_name, &mut buf);
        print!("{}", String::from_utf8_lossy(&buf));
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        logging::init(path)?;
    }

    let catalog = match &args.catalog {
        Some(path) => MemCatalog::load(path)
            .wrap_err_with(|| format!("Failed to load catalog '{}'", path.display()))?,
        None => MemCatalog::sample(),
    };

    if args.dump_catalog {
        println!("{}", catalog.to_json()?);
        return Ok(());
    }

    let table = CommandTable::standard()?;
    let start = match &args.section {
        Some(name) => Some(table.lookup(name).ok_or_else(|| {
            eyre!(
                "Unknown section '{}'. Use one of: {}",
                name,
                table.keys().collect::<Vec<_>>().join(", ")
            )
        })?),
        None => None,
    };

    let mut app = App::new(table, Box::new(catalog));
    if let Some(section) = start {
        app.set_section(section);
    }

    let tick = Duration::from_millis(args.tick_ms);
    tracing::info!(section = %app.section, tick_ms = args.tick_ms, "starting");

    let mut session = TerminalSession::enter()?;
    app.ctrl_digits = session.keyboard_enhanced();
    run_event_loop(session.terminal(), &mut app, tick)
}

fn run_event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tick: Duration,
) -> color_eyre::Result<()> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    // Global quit shortcut
                    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                        return Ok(());
                    }

                    if app.handle_key(key) == Action::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if app.handle_mouse(mouse) == Action::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal will be redrawn on next loop iteration
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
