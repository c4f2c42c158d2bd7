//! Interactive command shell for the contact book.
//!
//! This module provides the read loop that exposes contact book
//! functionality to the user: command parsing, dispatch to the service
//! layer, and colored rendering of results.

pub mod commands;
pub mod render;

pub use commands::parse_input;

use crate::services::ContactService;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the interactive shell until the user exits.
///
/// Reads one command per line from stdin. Every failure is rendered in
/// red and the loop continues; only the exit commands (or end of input)
/// leave the loop.
pub fn run_shell(service: &mut ContactService) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render::print_banner();
    println!("{}", render::main_menu());

    let mut line = String::new();
    loop {
        print!("{}", render::prompt());
        stdout.flush()?;

        line.clear();
        // End of input behaves like an exit command
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            render::print_farewell();
            break;
        }

        let (command, args) = parse_input(&line);
        if command.is_empty() {
            continue;
        }
        debug!(command = %command, ?args, "Dispatching command");

        match commands::dispatch(&command, &args, service) {
            commands::Outcome::Continue => {}
            commands::Outcome::Exit => {
                render::print_farewell();
                break;
            }
        }
    }

    Ok(())
}
