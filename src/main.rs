use clap::Parser;
use passop::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref site,
            ref username,
            ref password,
        } => passop::cli::commands::add::execute(
            &cli,
            site.as_deref(),
            username.as_deref(),
            password.as_deref(),
        ),
        Commands::List { show } => passop::cli::commands::list::execute(&cli, show),
        Commands::Edit {
            ref id,
            ref site,
            ref username,
            ref password,
        } => passop::cli::commands::edit::execute(
            &cli,
            id,
            site.as_deref(),
            username.as_deref(),
            password.as_deref(),
        ),
        Commands::Delete { ref id, force } => {
            passop::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Copy { ref id, field } => passop::cli::commands::copy::execute(&cli, id, field),
        Commands::Get { ref id, field } => passop::cli::commands::get::execute(&cli, id, field),
        Commands::Completions { ref shell } => passop::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passop::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
