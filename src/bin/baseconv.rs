/*
 * Copyright (C) 2026 taylor.fish <contact@taylor.fish>
 *
 * This file is part of baseconv.
 *
 * baseconv is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * baseconv is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with baseconv. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use baseconv::{convert, Direction, FormatPolicy, Representation};
use clap::Parser;

/// Converts data between text, binary, hexadecimal, octal, decimal and
/// ASCII code representations, and writes the result to standard output.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// The conversion to perform, e.g. `text-to-binary`.
    ///
    /// See `--list` for every available conversion.
    #[arg(required_unless_present_any = ["list", "from"])]
    direction: Option<Direction>,

    /// The representation to convert from. Use with `--to` instead of
    /// naming a conversion.
    #[arg(long, requires = "to", conflicts_with = "direction")]
    from: Option<Representation>,

    /// The representation to convert to.
    #[arg(long, requires = "from")]
    to: Option<Representation>,

    /// Convert this string instead of reading input.
    #[arg(short, long, conflicts_with = "file")]
    input: Option<String>,

    /// Read input from this file. If missing or "-", the input is read
    /// from standard input.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Pack output tokens together instead of separating them with spaces.
    #[arg(short, long)]
    packed: bool,

    /// Don't strip a trailing newline from file or standard input.
    #[arg(long)]
    keep_newline: bool,

    /// Show every available conversion and exit.
    #[arg(short, long)]
    list: bool,
}

impl Cli {
    fn resolve_direction(&self) -> anyhow::Result<Direction> {
        if let Some(direction) = self.direction {
            return Ok(direction);
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                Direction::new(from, to).with_context(|| {
                    format!("no conversion from {} to {}", from, to)
                })
            }
            _ => anyhow::bail!("no conversion given"),
        }
    }
}

fn strip_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }
    let input = match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            log::debug!("reading input from '{}'", path.display());
            fs::read_to_string(path).with_context(|| {
                format!("could not read file '{}'", path.display())
            })?
        }
        _ => {
            log::debug!("reading input from standard input");
            let mut input = String::new();
            stdin()
                .read_to_string(&mut input)
                .context("could not read standard input")?;
            input
        }
    };
    Ok(if cli.keep_newline {
        input
    } else {
        strip_newline(input)
    })
}

fn list() -> anyhow::Result<()> {
    let mut writer = BufWriter::new(stdout().lock());
    for &direction in Direction::ALL {
        writeln!(
            writer,
            "{:<18} {} -> {}{}",
            direction.name(),
            direction.source(),
            direction.target(),
            if direction.uses_format() {
                " (--packed)"
            } else {
                ""
            },
        )?;
    }
    writer.flush().context("could not write to standard output")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let cli = Cli::parse();
    if cli.list {
        return list();
    }

    let direction = cli.resolve_direction()?;
    log::debug!("converting {}", direction);
    if cli.packed && !direction.uses_format() {
        log::warn!("--packed has no effect on {}", direction);
    }

    let input = read_input(&cli)?;
    let output =
        convert(direction, &input, FormatPolicy::with_spaces(!cli.packed));

    let mut writer = stdout().lock();
    writeln!(writer, "{}", output)
        .and_then(|()| writer.flush())
        .context("could not write to standard output")
}
