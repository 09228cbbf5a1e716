// Wordsearch – A word search solver
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::io::Write;
use std::path::Path;
use std::{fs, process::ExitCode, ffi::OsString};
use clap::Parser;
use log::LevelFilter;
use wordsearch::puzzle_data::{self, PuzzleData};
use wordsearch::word_finder;

#[derive(Parser)]
#[command(name = "Search")]
struct Cli {
    #[arg(value_name = "PUZZLE")]
    puzzle: OsString,
    #[arg(short, long, value_name = "FILE")]
    output: Option<OsString>,
    #[arg(
        short = 'r',
        long,
        value_name = "ROWS",
        default_value_t = puzzle_data::GRID_ROWS,
    )]
    grid_rows: usize,
    #[arg(short, long)]
    quiet: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    // RUST_LOG takes priority over the command line
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}

fn read_puzzle<P: AsRef<Path>>(
    filename: P,
    grid_rows: usize,
) -> Result<PuzzleData, String> {
    let filename = filename.as_ref();

    fs::read_to_string(filename)
        .map_err(|e| e.to_string())
        .and_then(|s| {
            PuzzleData::parse(&s, grid_rows).map_err(|e| e.to_string())
        })
        .map_err(|e| format!("{}: {}", filename.to_string_lossy(), e))
}

fn run<W: Write>(cli: &Cli, mut out: W) -> Result<(), String> {
    let puzzle_data = read_puzzle(&cli.puzzle, cli.grid_rows)?;

    let report = word_finder::find_many(&puzzle_data.grid, &puzzle_data.words);

    log::info!(
        "found {} of {} words",
        report.n_found(),
        report.len(),
    );

    if let Some(output) = cli.output.as_ref() {
        report.save(output)
            .map_err(|e| format!("{}: {}", output.to_string_lossy(), e))?;

        if !cli.quiet {
            writeln!(out, "Report written to {}", output.to_string_lossy())
                .map_err(|e| e.to_string())?;
        }
    }

    if !cli.quiet {
        writeln!(out, "{}", report.to_json()).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    match run(&cli, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
