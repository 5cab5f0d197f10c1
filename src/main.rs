use std::io::IsTerminal;

use clap::Parser; // trait import enables EqsolveCli::parse()

use eqsolve::cli::EqsolveCli;
use eqsolve::commands::solve::{self, SolveOptions};
use eqsolve::config::Settings;
use eqsolve::logging;

fn main() -> anyhow::Result<()> {
    let args = EqsolveCli::parse();
    logging::init(args.verbose);

    let settings = Settings::load(args.config.as_deref())?;

    let stdout = std::io::stdout();
    let color = settings.color && !args.no_color && stdout.is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let opts = SolveOptions {
        coefficients: args.coefficients,
        format: args.format.unwrap_or(settings.format),
        prompt: (!args.no_prompt).then_some(settings.prompt),
        color,
    };

    solve::run(&opts, std::io::stdin().lock(), &mut stdout.lock())?;
    Ok(())
}
