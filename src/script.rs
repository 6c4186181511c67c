// src/script.rs

use log::{debug, warn};

use crate::bplus_tree::BPlusTree;
use crate::error::ScriptError;
use crate::node::Key;
use crate::record_index::RecordIndex;

const HEADER_PREFIX: &str = "FLH/";
const INSERT_PREFIX: &str = "INC:";
const SEARCH_PREFIX: &str = "BUS=:";
const HEIGHT_PREFIX: &str = "H/";

/// One line of a command script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(Key),
    Search(Key),
}

/// Reads the tree order from the `FLH/<order>` header line.
pub fn parse_header(line: &str) -> Result<usize, ScriptError> {
    line.trim()
        .strip_prefix(HEADER_PREFIX)
        .and_then(|order| order.trim().parse().ok())
        .ok_or_else(|| ScriptError::MissingHeader(line.to_string()))
}

/// Parses a command line. Returns `Ok(None)` for blank or unknown lines.
pub fn parse_command(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parse_key = |arg: &str| {
        arg.trim()
            .parse::<Key>()
            .map_err(|_| ScriptError::InvalidArgument {
                line: line_no,
                text: line.to_string(),
            })
    };

    if let Some(arg) = line.strip_prefix(INSERT_PREFIX) {
        return Ok(Some(Command::Insert(parse_key(arg)?)));
    }
    if let Some(arg) = line.strip_prefix(SEARCH_PREFIX) {
        return Ok(Some(Command::Search(parse_key(arg)?)));
    }

    warn!("line {line_no}: ignoring unknown command {line:?}");
    Ok(None)
}

/// Runs a whole script and returns the output lines.
///
/// The header is echoed first, then one line per command, then the final
/// tree height.
pub fn run_script(script: &str, records: &RecordIndex) -> Result<Vec<String>, ScriptError> {
    let mut lines = script.lines();
    let header = lines.next().unwrap_or_default();
    let order = parse_header(header)?;

    let mut tree = BPlusTree::with_order(order)?;
    let mut output = vec![header.trim().to_string()];

    for (i, line) in lines.enumerate() {
        // the header is line 1
        let line_no = i + 2;
        match parse_command(line_no, line)? {
            Some(Command::Insert(key)) => match records.get(key) {
                Some(pointer) => {
                    tree.insert(key, pointer)?;
                    output.push(format!("{INSERT_PREFIX}{key}/1"));
                }
                None => {
                    debug!("line {line_no}: key {key} not in data file");
                    output.push(format!("{INSERT_PREFIX}{key}/0"));
                }
            },
            Some(Command::Search(key)) => {
                let found = tree.search(key)?;
                output.push(format!("{SEARCH_PREFIX}{key}/{}", found.len()));
            }
            None => {}
        }
    }

    output.push(format!("{HEIGHT_PREFIX}{}", tree.height()?));
    Ok(output)
}
