use std::time::Duration;

use color_eyre::eyre::{eyre, Result, WrapErr};

use crossgrid::generate::generate;
use crossgrid::solver::SolveOptions;
use crossgrid::words::WordIndex;

fn usage() -> color_eyre::eyre::Error {
    eyre!("usage: crossgrid WORDLIST ROWS COLS [--seed N] [--max-decisions N] [--time-limit SECS]")
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or_else(usage)?;
    let rows: usize = args.next().ok_or_else(usage)?.parse().wrap_err("bad ROWS")?;
    let cols: usize = args.next().ok_or_else(usage)?.parse().wrap_err("bad COLS")?;

    let mut options = SolveOptions::default();
    while let Some(flag) = args.next() {
        let value = args.next().ok_or_else(usage)?;
        match flag.as_str() {
            "--seed" => options.shuffle_seed = Some(value.parse().wrap_err("bad seed")?),
            "--max-decisions" => {
                options.max_decisions = Some(value.parse().wrap_err("bad decision limit")?)
            }
            "--time-limit" => {
                options.time_limit =
                    Some(Duration::from_secs(value.parse().wrap_err("bad time limit")?))
            }
            _ => return Err(usage()),
        }
    }

    let contents = std::fs::read_to_string(&path)
        .wrap_err_with(|| format!("reading wordlist {}", path))?;
    let words: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    let index = WordIndex::from_words(words).wrap_err("parsing wordlist")?;

    let grid = generate(&index, rows, cols, options)?;
    println!("{}x{} grid from {} words:", rows, cols, index.word_count());
    println!();
    print!("{}", grid);
    Ok(())
}
