pub mod io;
pub mod menu;
pub mod output;
mod shell;
pub mod state;
pub mod table;

pub use shell::{run_cli, ExitReason, Shell};
