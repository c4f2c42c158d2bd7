//! Command parsing and dispatch.

use super::render;
use crate::services::ContactService;
use anyhow::{bail, Result};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Split a raw input line into a lowercase command and its arguments.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("").to_lowercase();
    let args = parts.map(|part| part.to_string()).collect();
    (command, args)
}

/// Dispatch one parsed command against the service.
///
/// All errors are rendered here; the caller only learns whether to keep
/// looping.
pub fn dispatch(command: &str, args: &[String], service: &mut ContactService) -> Outcome {
    let result = match command {
        "hello" => handle_hello(args),
        "add" => handle_add(args, service),
        "change" => handle_change(args, service),
        "add-birthday" => handle_add_birthday(args, service),
        "show-birthday" => handle_show_birthday(args, service),
        "birthdays" => handle_birthdays(args, service),
        "phone" => handle_phone(args, service),
        "all" => handle_all(args, service),
        "delete" => handle_delete(args, service),
        "menu" => handle_menu(args),
        "exit" | "close" | "bye" | "q" => return Outcome::Exit,
        unknown => {
            render::print_error(&format!(
                "Unknown command: {}. Type 'menu' to list commands",
                unknown
            ));
            return Outcome::Continue;
        }
    };

    if let Err(error) = result {
        render::print_error(&format!("Error: {}", error));
    }
    Outcome::Continue
}

/// Fail with a usage hint unless the argument count matches.
fn expect_args(args: &[String], expected: usize, usage: &str) -> Result<()> {
    if args.len() != expected {
        bail!("Usage: {}", usage);
    }
    Ok(())
}

fn handle_hello(args: &[String]) -> Result<()> {
    expect_args(args, 0, "hello")?;
    render::print_greeting();
    Ok(())
}

fn handle_add(args: &[String], service: &mut ContactService) -> Result<()> {
    expect_args(args, 2, "add [name] [phone_number]")?;
    service.add_contact(&args[0], &args[1])?;
    render::print_success(&format!(
        "Contact {} added with phone number {}",
        args[0], args[1]
    ));
    Ok(())
}

fn handle_change(args: &[String], service: &mut ContactService) -> Result<()> {
    expect_args(args, 2, "change [name] [new_phone_number]")?;
    service.change_contact(&args[0], &args[1])?;
    render::print_success(&format!(
        "Contact {} updated with new phone number {}",
        args[0], args[1]
    ));
    Ok(())
}

fn handle_add_birthday(args: &[String], service: &mut ContactService) -> Result<()> {
    expect_args(args, 2, "add-birthday [name] [DD.MM.YYYY]")?;
    service.add_birthday(&args[0], &args[1])?;
    render::print_success(&format!("Birthday added for {}: {}", args[0], args[1]));
    Ok(())
}

fn handle_show_birthday(args: &[String], service: &ContactService) -> Result<()> {
    expect_args(args, 1, "show-birthday [name]")?;
    let birthday = service.get_birthday(&args[0])?;
    render::print_birthday(&args[0], &birthday);
    Ok(())
}

fn handle_birthdays(args: &[String], service: &ContactService) -> Result<()> {
    expect_args(args, 0, "birthdays")?;
    let upcoming = service.upcoming_birthdays();
    render::print_upcoming(&upcoming);
    Ok(())
}

fn handle_phone(args: &[String], service: &ContactService) -> Result<()> {
    expect_args(args, 1, "phone [name]")?;
    let phones = service.get_phones(&args[0])?;
    render::print_phones(&args[0], &phones);
    Ok(())
}

fn handle_all(args: &[String], service: &ContactService) -> Result<()> {
    expect_args(args, 0, "all")?;
    render::print_showcase(&service.list_all());
    Ok(())
}

fn handle_delete(args: &[String], service: &mut ContactService) -> Result<()> {
    expect_args(args, 1, "delete [name]")?;
    service.delete_contact(&args[0])?;
    render::print_success(&format!("Contact {} deleted", args[0]));
    Ok(())
}

fn handle_menu(args: &[String]) -> Result<()> {
    expect_args(args, 0, "menu")?;
    println!("{}", render::main_menu());
    Ok(())
}
