// Licensed under MIT. See LICENSE for details.

use std::process;

use clap::Parser;
use log::{debug, LevelFilter};

use rchecklogic::{render, Expression, Result};

#[derive(Parser)]
#[command(name = "checklogic")]
#[command(version, about = "Prints sample formulas with minimal parentheses")]
struct Cli {
    /// Log at debug level (RUST_LOG still applies on top)
    #[arg(short, long)]
    verbose: bool,

    /// Print each formula's tree below its rendering
    #[arg(long)]
    tree: bool,
}

fn samples() -> Result<Vec<Expression>> {
    use rchecklogic::Expression as E;

    let p = E::prop("p")?;
    let q = E::prop("q")?;
    let r = E::prop("r")?;
    let s = E::prop("s")?;

    Ok(vec![
        // Law of the excluded middle.
        E::or(p.clone(), E::not(p.clone())),
        // Contradiction.
        E::and(q.clone(), E::not(q.clone())),
        // Implication.
        E::implies(p.clone(), q.clone()),
        // Tautology.
        E::iff(
            E::implies(p.clone(), q.clone()),
            E::or(E::not(p.clone()), q.clone()),
        ),
        E::not(E::or(p.clone(), q.clone())),
        E::not(E::and(p.clone(), q.clone())),
        E::not(E::implies(p.clone(), q.clone())),
        E::and(E::or(p.clone(), q.clone()), E::implies(q.clone(), r.clone())),
        E::iff(E::or(p.clone(), q.clone()), E::and(q.clone(), r.clone())),
        E::and(E::and(E::and(p.clone(), q.clone()), r.clone()), s.clone()),
        E::and(p.clone(), E::and(q.clone(), E::and(r.clone(), s.clone()))),
        E::implies(E::iff(p.clone(), q.clone()), r.clone()),
        E::iff(p.clone(), E::implies(q.clone(), r.clone())),
        E::implies(E::implies(E::implies(p.clone(), q.clone()), r.clone()), s.clone()),
        E::implies(p.clone(), E::implies(q.clone(), E::implies(r.clone(), s.clone()))),
        E::implies(E::implies(p.clone(), E::implies(q.clone(), r.clone())), s.clone()),
        E::implies(p.clone(), E::implies(E::implies(q.clone(), r.clone()), s.clone())),
        E::not(E::not(E::not(p.clone()))),
        // Mixed directions.
        E::implies(p.clone(), E::implied_by(q.clone(), r.clone())),
        E::implied_by(E::implies(p.clone(), q.clone()), r.clone()),
        E::implied_by(p.clone(), E::implies(q.clone(), r.clone())),
        E::implies(E::implied_by(p.clone(), q.clone()), r.clone()),
        E::implied_by(E::implied_by(E::implied_by(p.clone(), q.clone()), r.clone()), s.clone()),
        E::implied_by(p.clone(), E::implied_by(q.clone(), E::implied_by(r.clone(), s.clone()))),
        E::implied_by(E::implied_by(p.clone(), E::implied_by(q.clone(), r.clone())), s.clone()),
        E::implied_by(p, E::implied_by(E::implied_by(q, r), s)),
    ])
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let formulas = match samples() {
        Ok(formulas) => formulas,
        Err(e) => {
            eprintln!("Error building formulas: {}", e);
            process::exit(1);
        }
    };

    debug!("printing {} formulas", formulas.len());

    for formula in &formulas {
        println!("{}", render(formula));
        if cli.tree {
            println!("{:?}", formula);
        }
    }
}
