//! Deserialization of trec_eval-style run files.

pub mod parse;
pub mod record;

pub use parse::{ParseError, parse_run_file, parse_run_text};
pub use record::{Run, RunFile, Runs, Summary};
