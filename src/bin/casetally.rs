use clap::Parser;
use colored::Colorize;
use casetally_core::cli::{self, Cli};
use casetally_core::exit::TallyExit;

fn main() -> TallyExit {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd, cli.config.as_deref())
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(TallyExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            TallyExit::Error
        }
    }
}
