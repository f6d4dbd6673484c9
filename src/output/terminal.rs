//! Terminal renderer: a colored, column-aligned user listing.

use colored::Colorize;

use crate::models::User;
use crate::output::OutputRenderer;

/// Terminal output renderer for the user table.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, users: &[User]) -> String {
        if users.is_empty() {
            return format!("{}\n", "  No users.".dimmed());
        }

        let name_width = users
            .iter()
            .map(|u| u.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("NAME".len());
        let email_width = users
            .iter()
            .map(|u| u.email.chars().count())
            .max()
            .unwrap_or(0)
            .max("EMAIL".len());

        let mut output = String::new();
        output.push_str(&format!(
            "  {}  {}  {}\n",
            format!("{:<name_width$}", "NAME").dimmed(),
            format!("{:<email_width$}", "EMAIL").dimmed(),
            "ID".dimmed(),
        ));

        for user in users {
            // Pad before coloring — ANSI codes would break the alignment.
            output.push_str(&format!(
                "  {}  {}  {}\n",
                format!("{:<name_width$}", user.name).bold(),
                format!("{:<email_width$}", user.email),
                format!("#{}", user.id).cyan(),
            ));
        }

        output.push_str(&format!(
            "{}\n",
            "───────────────────────────────────".dimmed()
        ));
        output.push_str(&format!(
            " {} {}\n",
            users.len().to_string().bold(),
            if users.len() == 1 { "user" } else { "users" },
        ));

        output
    }
}
