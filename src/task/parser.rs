//! Task block assembler
//!
//! Drives a two-state machine over classified lines. A task is `Collecting`
//! from its title line until a separator, the next title, or end of input.

use tracing::{debug, trace};

use super::line::{split_labels, Line};
use super::model::TaskRecord;

/// Parse a whole document into task records, in document order
pub fn parse_tasks(content: &str) -> Vec<TaskRecord> {
    let mut parser = TaskParser::new();
    for line in split_lines(content) {
        parser.feed(line);
    }
    parser.finish()
}

/// Split on `\n`, `\r\n` and a lone `\r`. A terminator at the very end does
/// not start an extra empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(&['\r', '\n'][..]) {
            Some(i) => {
                let line = &rest[..i];
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Collecting(Draft),
}

/// A task in progress plus the description lines not yet flushed into it
#[derive(Debug)]
struct Draft {
    record: TaskRecord,
    buffer: Vec<String>,
}

impl Draft {
    fn new(title: &str) -> Self {
        Self {
            record: TaskRecord::new(title),
            buffer: Vec::new(),
        }
    }

    /// Replace the description with the buffered lines. An empty buffer
    /// leaves the current description alone.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        self.record.description = self.buffer.join("\n").trim().to_string();
        self.buffer.clear();
    }

    fn finish(mut self) -> TaskRecord {
        self.flush();
        self.record
    }
}

/// Push-style parser: feed lines one at a time, then `finish`.
#[derive(Debug, Default)]
pub struct TaskParser {
    state: State,
    output: Vec<TaskRecord>,
    line_no: usize,
}

impl TaskParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a task currently has a title and is collecting lines
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, State::Collecting(_))
    }

    /// Records finalized so far
    pub fn completed(&self) -> &[TaskRecord] {
        &self.output
    }

    pub fn feed(&mut self, raw: &str) {
        self.line_no += 1;
        let line_no = self.line_no;

        match Line::classify(raw) {
            Line::Title(title) => {
                self.close_current();
                trace!(line = line_no, title, "task started");
                self.state = State::Collecting(Draft::new(title));
            }
            Line::DescriptionStart => match &mut self.state {
                State::Collecting(draft) => draft.flush(),
                State::Idle => debug!(line = line_no, "description marker outside a task"),
            },
            Line::Labels(text) => match &mut self.state {
                State::Collecting(draft) => {
                    draft.flush();
                    draft.record.labels = split_labels(text);
                }
                State::Idle => debug!(line = line_no, "labels marker outside a task ignored"),
            },
            Line::Separator => self.close_current(),
            Line::Plain(text) => match &mut self.state {
                State::Collecting(draft) => draft.buffer.push(text.to_string()),
                State::Idle if !text.is_empty() => {
                    debug!(line = line_no, "text outside a task ignored")
                }
                State::Idle => {}
            },
        }
    }

    /// Close any task in progress and return every record in document order
    pub fn finish(mut self) -> Vec<TaskRecord> {
        self.close_current();
        self.output
    }

    fn close_current(&mut self) {
        if let State::Collecting(draft) = std::mem::take(&mut self.state) {
            let record = draft.finish();
            debug_assert!(!record.title.is_empty());
            trace!(title = %record.title, labels = record.labels.len(), "task closed");
            self.output.push(record);
        }
    }
}
