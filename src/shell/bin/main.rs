use clap::Parser;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use library_ledger::core::library::LibraryError;
use library_ledger::shell::config::ShellArgs;
use library_ledger::shell::controller::AppState;
use library_ledger::shell::menu::Shell;
use library_ledger::utils::logging::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let args = ShellArgs::parse();
    setup_tracing(args.log_level, args.log_json);
    info!("starting library shell {:?}", args);

    let state = AppState::new(args.lang, args.format);
    let mut shell = Shell::new(state, BufReader::new(stdin()), stdout());
    shell.run().await
}
