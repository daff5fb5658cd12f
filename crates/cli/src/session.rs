// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Line oriented evaluation session.
//!
//! A session reads one command per line:
//!
//! ```text
//! evaluate AS KS QS JS 10S   evaluate and remember the best hand
//! winner                     print the last best hand
//! clear                      forget the last best hand
//! help                       print the commands list
//! quit                       end the session
//! ```
use anyhow::Result;
use log::{debug, info};
use serde_json::json;
use std::io::{BufRead, Write};

use pokerhand_eval::{EvaluationResult, Evaluator, ResultStore};

use crate::input::{parse_pool, split_tokens};

const NO_RESULT: &str = "No hand has been evaluated yet.";
const CLEARED: &str = "Last winning combination has been cleared.";

const HELP: &str = "\
Commands:
  evaluate <cards>   evaluate 5 to 7 cards, e.g. evaluate AS KS QS JS 10S
  winner             print the last winning combination
  clear              clear the last winning combination
  help               print this message
  quit               end the session";

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human readable text.
    #[default]
    Text,
    /// JSON objects, one per line.
    Json,
}

/// Evaluation session that writes replies to an output.
#[derive(Debug)]
pub struct Session<S> {
    evaluator: Evaluator<S>,
    format: Format,
}

impl<S: ResultStore> Session<S> {
    /// Creates a session.
    pub fn new(evaluator: Evaluator<S>, format: Format) -> Self {
        Self { evaluator, format }
    }

    /// Parses and evaluates card tokens and writes the result.
    pub fn evaluate<T, W>(&self, tokens: &[T], out: &mut W) -> Result<EvaluationResult>
    where
        T: AsRef<str>,
        W: Write,
    {
        let pool = parse_pool(tokens)?;
        let result = self.evaluator.evaluate(&pool)?;
        self.write_result(&result, out)?;
        Ok(result)
    }

    /// Writes the last result.
    pub fn winner<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.evaluator.last_result() {
            Some(result) => self.write_result(&result, out),
            None => self.write_message(NO_RESULT, out),
        }
    }

    /// Clears the last result.
    pub fn clear<W: Write>(&self, out: &mut W) -> Result<()> {
        self.evaluator.clear_last();
        self.write_message(CLEARED, out)
    }

    /// Runs commands from the input until the input ends or a quit command.
    ///
    /// Command errors are written to the output and don't end the session.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        info!("Session started");

        for line in input.lines() {
            let line = line?;
            let mut parts = line.trim().splitn(2, char::is_whitespace);
            let command = parts.next().unwrap_or_default();
            let args = split_tokens(parts.next().unwrap_or_default());
            debug!("Command {command:?} {args:?}");

            let res = match command {
                "" => Ok(()),
                "evaluate" | "eval" => self.evaluate(&args, out).map(|_| ()),
                "winner" => self.winner(out),
                "clear" => self.clear(out),
                "help" => self.write_message(HELP, out),
                "quit" | "exit" => break,
                _ => Err(anyhow::anyhow!(
                    "unknown command '{command}', type help for the commands list"
                )),
            };

            if let Err(e) = res {
                self.write_error(&e, out)?;
            }

            out.flush()?;
        }

        info!("Session ended");

        Ok(())
    }

    fn write_result<W: Write>(&self, result: &EvaluationResult, out: &mut W) -> Result<()> {
        match self.format {
            Format::Text => writeln!(out, "{result}")?,
            Format::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
        }

        Ok(())
    }

    fn write_message<W: Write>(&self, message: &str, out: &mut W) -> Result<()> {
        match self.format {
            Format::Text => writeln!(out, "{message}")?,
            Format::Json => writeln!(out, "{}", json!({ "message": message }))?,
        }

        Ok(())
    }

    fn write_error<W: Write>(&self, err: &anyhow::Error, out: &mut W) -> Result<()> {
        match self.format {
            Format::Text => writeln!(out, "error: {err}")?,
            Format::Json => writeln!(out, "{}", json!({ "error": err.to_string() }))?,
        }

        Ok(())
    }
}
