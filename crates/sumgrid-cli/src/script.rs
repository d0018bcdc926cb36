//! Command scripts for the `run` subcommand
//!
//! One command per line:
//!
//! ```text
//! # comment
//! const 0,0 5
//! sum 0,2 0,0 0,1
//! eval 0,2
//! print
//! ```

use anyhow::{bail, Context, Result};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;
use sumgrid::display::{render_line, render_results};
use sumgrid::prelude::*;

/// A parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Constant(CellId, f64),
    Sum(CellId, Vec<CellId>),
    Eval(CellId),
    Print,
}

/// Parse one line; blank lines and comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match keyword {
        "const" => {
            let [cell, value] = args.as_slice() else {
                bail!("usage: const <row,col> <number>");
            };
            let value: f64 = value
                .parse()
                .with_context(|| format!("invalid number '{}'", value))?;
            Command::Constant(cell.parse()?, value)
        }
        "sum" => {
            let Some((cell, refs)) = args.split_first() else {
                bail!("usage: sum <row,col> [<row,col> ...]");
            };
            let refs = refs
                .iter()
                .map(|r| r.parse::<CellId>())
                .collect::<Result<Vec<_>, _>>()?;
            Command::Sum(cell.parse()?, refs)
        }
        "eval" => {
            let [cell] = args.as_slice() else {
                bail!("usage: eval <row,col>");
            };
            Command::Eval(cell.parse()?)
        }
        "print" => {
            if !args.is_empty() {
                bail!("usage: print");
            }
            Command::Print
        }
        other => bail!("unknown command '{}'", other),
    };

    Ok(Some(command))
}

/// Parse a whole script, reporting the failing line number
pub fn parse_script(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let parsed = parse_line(line).with_context(|| format!("line {}: '{}'", index + 1, line))?;
        commands.extend(parsed);
    }
    Ok(commands)
}

/// Read a script from `input`, or from `stdin` when `input` is `-`
pub fn read_source(input: &Path, mut stdin: impl Read) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Failed to read script from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read '{}'", input.display()))
    }
}

/// Final cell values as a JSON object keyed by `"row,col"`, in row-major order
struct CellReport<'a>(Vec<(&'a CellId, &'a CellValue)>);

impl<'a> CellReport<'a> {
    fn new(values: &'a HashMap<CellId, CellValue>) -> Self {
        let mut entries: Vec<_> = values.iter().collect();
        entries.sort_unstable_by_key(|(id, _)| **id);
        Self(entries)
    }
}

impl Serialize for CellReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, value)| (id.to_string(), *value)))
    }
}

/// Run `commands` against a fresh sheet, writing output to `out`
///
/// `eval` prints one line and `print` prints every cell. After the last
/// command all cells are written once more, as text lines or, with `json`,
/// as a single JSON object.
pub fn execute<W: Write>(
    commands: Vec<Command>,
    options: &CalculationOptions,
    json: bool,
    out: &mut W,
) -> Result<CalculationStats> {
    let mut sheet = Sheet::new();

    for command in commands {
        match command {
            Command::Constant(id, value) => sheet.set_constant(id, value),
            Command::Sum(id, refs) => {
                sheet.set_sum_cell(id, refs);
            }
            Command::Eval(id) => writeln!(out, "{}", render_line(id, &sheet.evaluate(id)))?,
            Command::Print => {
                for line in sheet.render() {
                    writeln!(out, "{}", line)?;
                }
            }
        }
    }

    let (values, stats) = sheet.calculate(options);

    if json {
        serde_json::to_writer_pretty(&mut *out, &CellReport::new(&values))
            .context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        for line in render_results(&values) {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(stats)
}
