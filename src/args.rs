use bank::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Missing argument: {0}")]
    Missing(&'static str),

    #[error("Commands file not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments, requiring the first argument to be the path of a commands CSV file
pub fn parse_input_arg() -> Result<PathBuf> {
    let filename = env::args()
        .nth(1)
        .ok_or(ArgsError::Missing("usage: bank-ledger <commands.csv>"))?;

    let path = fs::canonicalize(&filename).with_context(|| ArgsError::FileNotFound(filename))?;

    Ok(path)
}
