mod app;
mod audio;
mod config;
mod debug;
mod input;
mod sim;
mod ui;

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug_enabled = parse_args(&args);

    debug::init(debug_enabled).context("failed to initialize debug log")?;
    debug::log("SESSION_START", "ghost-pong starting");

    let config = config::load_config().context("failed to load configuration")?;

    // Setup terminal. Mouse capture is required - the player paddle
    // follows the pointer.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app::run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("game loop failed")
}

/// Hand-rolled argument parsing; --debug is the only real flag.
fn parse_args(args: &[String]) -> bool {
    let mut debug_enabled = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug_enabled = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }
    debug_enabled
}

fn print_usage(program: &str) {
    println!("Ghost Pong - terminal pong against a reactive AI");
    println!();
    println!("Usage:");
    println!("  {}            # Play", program);
    println!(
        "  {} --debug    # Play with diagnostics in /tmp/ghost-pong-debug.log",
        program
    );
    println!();
    println!("Controls:");
    println!("  Mouse         Move your paddle (left side)");
    println!("  Up/Down       Move without a mouse");
    println!("  Space         Start, or stop and reset the score");
    println!("  Q / Esc       Quit");
}
