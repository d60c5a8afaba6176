use std::io::{self, Write};

use super::{output::Output, state::Operation};

pub const MENU_TITLE: &str = "Expense Tracker Menu";
pub const MENU_PROMPT: &str = "Choose an option: ";
pub const INVALID_OPTION: &str = "Invalid option. Try again.";

/// Represents a single numbered menu entry.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub operation: Operation,
}

pub const MAIN_MENU: &[MenuItem] = &[
    MenuItem {
        key: "1",
        label: "Add Expense",
        operation: Operation::Add,
    },
    MenuItem {
        key: "2",
        label: "List Expenses",
        operation: Operation::List,
    },
    MenuItem {
        key: "3",
        label: "Show Monthly Total",
        operation: Operation::MonthlyTotal,
    },
    MenuItem {
        key: "4",
        label: "Show Category Total",
        operation: Operation::CategoryTotal,
    },
    MenuItem {
        key: "5",
        label: "Save and Exit",
        operation: Operation::SaveAndExit,
    },
];

pub fn render<W: Write>(out: &mut Output<W>) -> io::Result<()> {
    out.blank_line()?;
    out.title(MENU_TITLE)?;
    for item in MAIN_MENU {
        out.line(format!("{}. {}", item.key, item.label))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_match_choice_parsing() {
        for item in MAIN_MENU {
            assert_eq!(Operation::from_choice(item.key), Some(item.operation));
        }
    }

    #[test]
    fn render_lists_every_option() {
        let mut out = Output::plain(Vec::new());
        render(&mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            text,
            "\nExpense Tracker Menu\n1. Add Expense\n2. List Expenses\n3. Show Monthly Total\n4. Show Category Total\n5. Save and Exit\n"
        );
    }
}
