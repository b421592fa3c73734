// Entry point of the `cluster-agent` binary.
// Parses the command line, initializes logging and hands off to the
// matching command. The process exits with the command's status code.

mod cli;
mod commands;

use clap::Parser;
use cli::cmd_enums::{Cli, Commands};
use cluster_agent::logger;
use commands::{CommandContext, components, resolve, schema, set, validate, version};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let code = match cli.command {
        Commands::Version => version::run(),
        Commands::Components => match CommandContext::load(cli.config.as_deref(), &cli.conf_dirs) {
            Ok(ctx) => components::run(&ctx),
            Err(code) => code,
        },
        Commands::Schema { component, file } => schema::run(component, file.as_deref()),
        Commands::Resolve { component, name, file, json } => resolve::run(component, &name, file.as_deref(), json),
        Commands::Validate { component, name, value, json } => validate::run(component, &name, &value, json),
        Commands::Set { component, name, value, file, dry_run, json } => {
            match CommandContext::load(cli.config.as_deref(), &cli.conf_dirs) {
                Ok(ctx) => set::run(&ctx, component, &name, &value, file.as_deref(), dry_run, json),
                Err(code) => code,
            }
        }
    };

    std::process::exit(code);
}
