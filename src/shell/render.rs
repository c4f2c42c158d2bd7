//! Colored terminal rendering for shell output.
//!
//! All user-facing formatting lives here; the service layer hands over
//! plain values and typed errors.

use crate::book::UpcomingBirthday;
use crate::services::ContactSummary;
use colored::Colorize;

const MENU_WIDTH: usize = 62;
const SHOWCASE_WIDTH: usize = 64;

const BANNER: &str = r"
   ___         _      _               _ _               _
  / __|___ _ _| |_ __| |_ __  ___ ___| | |__  ___  ___ | |__
 | (__/ _ \ ' \  _/ _` / _| \/ -_)___| | '_ \/ _ \/ _ \| / /
  \___\___/_||_\__\__,_\__|_|\_\___|  |_|_.__/\___/\___/|_\_\
";

/// The input prompt.
pub fn prompt() -> String {
    format!("{} ", ">".blue().bold())
}

/// Displays a success message in green color.
pub fn print_success(message: &str) {
    println!("{}", message.green());
}

/// Displays an error message in red color.
pub fn print_error(message: &str) {
    println!("{}", message.red().bold());
}

pub fn print_greeting() {
    println!("{}", "Hello, how can I assist you today?".cyan().bold());
}

pub fn print_farewell() {
    println!();
    println!("{}", "Goodbye! Have a great day!".magenta().bold());
    println!();
}

/// Render the startup banner.
pub fn print_banner() {
    for line in BANNER.trim_matches('\n').lines() {
        println!("{}", line.cyan().bold());
    }
    println!();
}

/// A contact's birthday line.
pub fn print_birthday(name: &str, birthday: &str) {
    println!(
        "{}{}{}",
        name.blue().bold(),
        "'s birthday: ".blue(),
        birthday.blue().bold()
    );
}

/// A contact's phone line; an empty list renders as "No phone numbers".
pub fn print_phones(name: &str, phones: &[String]) {
    let joined = if phones.is_empty() {
        "No phone numbers".to_string()
    } else {
        phones.join("; ")
    };
    println!(
        "{}{}{}",
        name.blue().bold(),
        "'s phone number(s): ".blue(),
        joined.blue().bold()
    );
}

/// The upcoming-birthday listing; an empty query renders as "none".
pub fn print_upcoming(upcoming: &[UpcomingBirthday]) {
    if upcoming.is_empty() {
        println!("{}", "No upcoming birthdays".yellow());
        return;
    }
    println!("{}", "Upcoming birthdays:".yellow());
    for entry in upcoming {
        println!(
            "{}",
            format!("{}: {}", entry.name, entry.date.format("%d.%m.%Y")).yellow()
        );
    }
}

/// Render all contacts as a bordered, card-like block.
pub fn print_showcase(rows: &[ContactSummary]) {
    if rows.is_empty() {
        print_error("No contacts found");
        return;
    }

    let top_border = "=".repeat(SHOWCASE_WIDTH).blue().bold();
    let divider = "-".repeat(SHOWCASE_WIDTH).blue();
    let header = center(" Address Book - All Contacts ", SHOWCASE_WIDTH)
        .blue()
        .bold();

    println!("{}", top_border);
    println!("{}", header);
    println!("{}", top_border);

    for (index, row) in rows.iter().enumerate() {
        let phones = if row.phones.is_empty() {
            "No phone numbers".to_string()
        } else {
            row.phones.join("; ")
        };
        let birthday = row.birthday.as_deref().unwrap_or("No birthday");

        println!("{}", format!("[{}] {}", index + 1, row.name).cyan().bold());
        println!("    {}: {}", "Phones".blue().bold(), phones.green());
        println!("    {}: {}", "Birthday".blue().bold(), birthday.magenta());
        if index + 1 != rows.len() {
            println!("{}", divider);
        }
    }

    println!("{}", top_border);
}

/// The command menu panel.
pub fn main_menu() -> String {
    let top_border = "=".repeat(MENU_WIDTH).blue().bold().to_string();
    let title = center(" Address Book Command Palette ", MENU_WIDTH)
        .blue()
        .bold()
        .to_string();
    let subtitle = "Quick guide: items in [brackets] are required"
        .magenta()
        .to_string();

    let mut lines = vec![top_border.clone(), title, subtitle, top_border.clone()];
    for (command, description) in [
        ("hello", "Greet the assistant"),
        ("add [name] [phone_number]", "Add a contact or another phone"),
        ("change [name] [new_phone_number]", "Replace the primary phone"),
        ("add-birthday [name] [DD.MM.YYYY]", "Set a birthday (one-shot)"),
        ("show-birthday [name]", "Show a contact's birthday"),
        ("birthdays", "List upcoming birthdays"),
        ("phone [name]", "Show a contact's phone numbers"),
        ("all", "Show every contact"),
        ("delete [name]", "Remove a contact"),
        ("menu", "Reopen this panel"),
        ("exit / close / bye / q", "Leave the shell"),
    ] {
        lines.push(format!(
            "  {} {}\n      {}",
            ">>".blue().bold(),
            command.cyan().bold(),
            description.white()
        ));
    }
    lines.push(top_border);
    lines.join("\n")
}

fn center(text: &str, width: usize) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let padding = width - text.len();
    let left = padding / 2;
    format!(
        "{}{}{}",
        " ".repeat(left),
        text,
        " ".repeat(padding - left)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_evenly() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
    }

    #[test]
    fn test_center_leaves_wide_text_alone() {
        assert_eq!(center("abcdef", 4), "abcdef");
    }

    #[test]
    fn test_menu_lists_every_command() {
        let menu = main_menu();
        for command in [
            "hello",
            "add",
            "change",
            "add-birthday",
            "show-birthday",
            "birthdays",
            "phone",
            "all",
            "delete",
            "menu",
        ] {
            assert!(menu.contains(command), "menu is missing {}", command);
        }
    }
}
