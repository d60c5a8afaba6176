use std::io::{self, IsTerminal};

use expense_tracker::{cli::output::Output, cli::run_cli, config::ConfigManager, init};

fn main() {
    init();

    if let Err(err) = run_cli(&ConfigManager::new()) {
        let stderr = io::stderr();
        let styled = stderr.is_terminal();
        let mut out = Output::new(stderr, styled);
        if out.error(format!("Error: {err}")).is_err() {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}
