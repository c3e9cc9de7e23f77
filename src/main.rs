mod error;
mod factorial;
mod input;
mod permutations;

use clap::{arg, command, value_parser, ArgAction, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command<'static> {
    command!()
        .allow_negative_numbers(true)
        .arg(
            arg!(values: [VALUES] ... "Complexity values, root first")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            arg!(-i --input <PATH> "Read the values from a file (`-` for stdin)")
                .required(false)
                .conflicts_with("values"),
        )
        .arg(
            arg!(-m --modulus <MODULUS> "Modulus for the count")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--exact "Print the count without modular reduction")
                .action(ArgAction::SetTrue)
                .conflicts_with("modulus"),
        )
        .arg(arg!(-v --verbose "Explain a zero count").action(ArgAction::SetTrue))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let complexity = match matches.get_one::<String>("input") {
        Some(path) => input::read_sequence(path)?,
        None => matches
            .get_many::<i64>("values")
            .map(|values| values.copied().collect())
            .unwrap_or_default(),
    };
    info!(len = complexity.len(), "counting permutations");

    if *matches.get_one::<bool>("exact").unwrap_or(&false) {
        println!("{}", permutations::count_permutations_exact(&complexity)?);
    } else if let Some(&modulus) = matches.get_one::<u64>("modulus") {
        println!(
            "{}",
            permutations::count_permutations_mod(&complexity, modulus)?
        );
    } else {
        println!("{}", permutations::count_permutations(&complexity)?);
    }

    if *matches.get_one::<bool>("verbose").unwrap_or(&false) {
        if let Some(index) = permutations::first_violation(&complexity) {
            eprintln!(
                "Child at index {index} ({}) does not exceed the root ({})",
                complexity[index], complexity[0]
            );
        }
    }

    Ok(())
}
