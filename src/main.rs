//   ____                      _            ____                       _
//  / ___| _ __  _   _  _ __  | |_   __ _  / ___|  ___   _   _  _ __  | |_
// | |    | '__|| | | || '_ \ | __| / _` || |     / _ \ | | | || '_ \ | __|
// | |___ | |   | |_| || |_) || |_ | (_| || |___ | (_) || |_| || | | || |_
//  \____||_|    \__, || .__/  \__| \__,_| \____| \___/  \__,_||_| |_| \__|
//               |___/ |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password policy search-space and entropy analyzer

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Parser;

use cryptacount::passgen::{assess_password_strength, generate_password};
use cryptacount::policy::{self, Policy};
use cryptacount::report;
use cryptacount::searchspace::{calculate_search_space, entropy_bits};

#[derive(Debug, Parser)]
#[command(name = "cryptacount")]
#[command(about = "Password policy search-space and entropy analyzer", long_about = None)]
struct Cli {
    /// Password length
    #[arg(short, long)]
    length: usize,

    /// Character classes to include [lower, upper, digits, symbols]
    #[arg(short, long, required = true, num_args = 1..)]
    include: Vec<String>,

    /// Exact counts per class (e.g. digits=2 symbols=1)
    #[arg(short, long, num_args = 0..)]
    exact: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let included = cli
        .include
        .iter()
        .map(|name| policy::parse_class(name))
        .collect::<Result<Vec<_>, _>>()?;
    let exact = cli
        .exact
        .iter()
        .map(|token| policy::parse_exact_token(token))
        .collect::<Result<BTreeMap<_, _>, _>>()?;
    let policy = Policy::new(cli.length, included, exact)?;

    let search_space = calculate_search_space(&policy)
        .context("Failed to calculate search space")?;
    let entropy = entropy_bits(&search_space);
    let password = generate_password(&policy)
        .context("Failed to generate password")?;

    report::print_report(&policy, &search_space, entropy, &password);

    if !password.is_empty() {
        let (rating, score, feedback) = assess_password_strength(&password);
        println!("Strength: {} (score: {}/4)", rating, score);
        if !feedback.is_empty() {
            println!("Suggestions: {}", feedback);
        }
    }

    Ok(())
}
