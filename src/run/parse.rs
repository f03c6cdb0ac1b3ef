use crate::run::record::{Run, RunFile, Runs, Summary};
use anyhow::Context;
use std::fs;

/// Per-line failures. All of these abort the whole parse: by the time a
/// line is rejected the accumulator may already be half-updated, so partial
/// results are never returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("run parse error at line {lno}: expected 3 tab-separated columns, got {cols}: {line:?}")]
    MalformedLine {
        lno: usize,
        cols: usize,
        line: String,
    },
    #[error("run parse error at line {lno}: topic must be `all` or an integer: {topic:?}")]
    MalformedTopic { lno: usize, topic: String },
    #[error("run parse error at line {lno}: value must be a number: {value:?}")]
    MalformedValue { lno: usize, value: String },
}

/// Topic column of a run file line: an integer topic id, or the `all`
/// sentinel marking an aggregate row.
#[derive(Debug, Clone, PartialEq)]
enum Topic {
    All,
    Id(i64),
}

/// Value column: numeric for ordinary measurements, raw text for the one
/// `runid` row that names the evaluated system.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Numeric(f64),
    Text(String),
}

/// Split one line into (measurement, topic, value).
///
/// Expected columns (tab-separated):
/// measurement  topic  value
///
/// Example:
/// map	1	0.3521
fn read_line(line: &str, lno: usize) -> Result<(String, Topic, Value), ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return Err(ParseError::MalformedLine {
            lno,
            cols: fields.len(),
            line: line.to_string(),
        });
    }

    let measurement = fields[0].trim().to_string();

    let topic = if fields[1] == "all" {
        Topic::All
    } else {
        match fields[1].parse::<i64>() {
            Ok(id) => Topic::Id(id),
            Err(_) => {
                return Err(ParseError::MalformedTopic {
                    lno,
                    topic: fields[1].to_string(),
                });
            }
        }
    };

    // The runid value is kept verbatim (no trimming); everything else must
    // parse as a float.
    let value = if measurement == "runid" {
        Value::Text(fields[2].to_string())
    } else {
        match fields[2].parse::<f64>() {
            Ok(v) => Value::Numeric(v),
            Err(_) => {
                return Err(ParseError::MalformedValue {
                    lno,
                    value: fields[2].to_string(),
                });
            }
        }
    };

    Ok((measurement, topic, value))
}

/// Parse trec_eval output into per-topic runs and an aggregate summary.
///
/// Lines for a topic are assumed contiguous, topics in non-decreasing
/// order with the `all` rows last (trec_eval writes files this way). An
/// in-progress topic is committed when a line for a different topic id
/// shows up, and again at end of input, so the final topic of a
/// well-formed file survives even though only aggregate rows follow it.
/// A topic whose lines are split by another topic's block gets its
/// earlier record silently replaced at the later commit.
pub fn parse_run_text(text: &str) -> crate::Result<RunFile> {
    let mut runs = Runs::new();
    let mut summary = Summary::default();
    let mut current: Option<Run> = None;

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (measurement, topic, value) = read_line(line, lno)?;

        match (topic, value) {
            // The runid row carries the experiment identifier and never
            // touches the topic accumulator.
            (_, Value::Text(id)) => summary.run_id = id,
            (Topic::All, Value::Numeric(v)) => summary.add(&measurement, v),
            (Topic::Id(t), Value::Numeric(v)) => match current.as_mut() {
                Some(run) if run.topic == t => run.add(&measurement, v),
                _ => {
                    // Topic boundary: the previous run is complete.
                    if let Some(done) = current.take() {
                        runs.insert(done.topic, done);
                    }
                    let mut run = Run::new(t);
                    run.add(&measurement, v);
                    current = Some(run);
                }
            },
        }
    }

    // End of input commits the in-progress topic.
    if let Some(done) = current {
        runs.insert(done.topic, done);
    }

    Ok(RunFile { runs, summary })
}

/// Parse a run file from disk. See [`parse_run_text`].
pub fn parse_run_file(path: &str) -> crate::Result<RunFile> {
    let text = fs::read_to_string(path).with_context(|| format!("read run file {}", path))?;
    parse_run_text(&text)
}
