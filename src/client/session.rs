//! Interactive prompt loop: pick a tool, fill its parameters, show the result.
//!
//! One tool call per session. The session reads from any `BufRead` and writes
//! to any `Write`, so the binary hands it stdin/stdout and tests hand it
//! in-memory buffers.

use rmcp::model::{CallToolResult, Content, RawContent};
use serde_json::{Map, Value};
use std::io::{BufRead, Write};
use tracing::{error, warn};

use super::catalog::OperationDescriptor;
use super::coerce::coerce;
use super::connection::ToolInvoker;
use super::error::ClientError;

/// How a session ended. Every variant is a clean exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The tool ran and its result was printed.
    Completed,
    /// The server offered no tools.
    NoTools,
    /// The operator's selection was not a listed number.
    InvalidSelection,
    /// The call failed; the error was printed.
    CallFailed,
}

pub struct InteractiveSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one list, select, fill, call, render cycle.
    ///
    /// Catalog, transport and terminal errors propagate; a failed tool call
    /// is printed and reported as [`SessionOutcome::CallFailed`].
    pub async fn run<I>(&mut self, invoker: &I) -> Result<SessionOutcome, ClientError>
    where
        I: ToolInvoker + ?Sized,
    {
        let operations = invoker.list_operations().await?;
        if operations.is_empty() {
            writeln!(self.output, "No tools are available.")?;
            return Ok(SessionOutcome::NoTools);
        }

        let Some(operation) = self.choose_operation(&operations)? else {
            return Ok(SessionOutcome::InvalidSelection);
        };

        let arguments = self.collect_arguments(operation)?;

        writeln!(self.output, "Calling {}...", operation.name)?;
        match invoker.invoke(&operation.name, arguments).await {
            Ok(result) => {
                self.render(&result)?;
                Ok(SessionOutcome::Completed)
            }
            Err(e) => {
                error!("Tool call '{}' failed: {}", operation.name, e);
                self.report_failure(&e)?;
                Ok(SessionOutcome::CallFailed)
            }
        }
    }

    /// Print the numbered catalog and read a selection.
    ///
    /// Returns `None` after printing `Invalid selection.` for anything that is
    /// not a listed number.
    pub fn choose_operation<'a>(
        &mut self,
        operations: &'a [OperationDescriptor],
    ) -> Result<Option<&'a OperationDescriptor>, ClientError> {
        writeln!(self.output, "Available tools:")?;
        for (index, operation) in operations.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, operation.name)?;
        }

        let line = self.prompt("Select a tool by number: ")?;
        let chosen = line
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| operations.get(index));

        match chosen {
            Some(operation) => {
                writeln!(self.output, "Selected: {}", operation.name)?;
                if !operation.description.is_empty() {
                    writeln!(self.output, "{}", operation.description)?;
                }
                Ok(Some(operation))
            }
            None => {
                writeln!(self.output, "Invalid selection.")?;
                Ok(None)
            }
        }
    }

    /// Prompt for every parameter in declared order.
    ///
    /// Empty optional parameters are left out. Empty required parameters are
    /// asked for again until something is entered or input ends. Whitespace
    /// counts as an entry.
    pub fn collect_arguments(
        &mut self,
        operation: &OperationDescriptor,
    ) -> Result<Map<String, Value>, ClientError> {
        let mut arguments = Map::new();

        for param in &operation.params {
            let marker = if param.required { "*" } else { "" };
            let prompt = format!("'{}'{} (type: {}): ", param.name, marker, param.kind);

            let raw = loop {
                let line = self.prompt(&prompt)?;
                if !line.is_empty() || !param.required {
                    break line;
                }
                writeln!(self.output, "'{}' is required.", param.name)?;
            };

            if raw.is_empty() {
                continue;
            }

            let value = match coerce(&raw, &param.kind) {
                Ok(value) => value,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(self.output, "Warning: {e}; sending the text as entered.")?;
                    Value::String(raw)
                }
            };
            arguments.insert(param.name.clone(), value);
        }

        Ok(arguments)
    }

    /// Print the first content fragment on a single line.
    pub fn render(&mut self, result: &CallToolResult) -> Result<(), ClientError> {
        if result.is_error == Some(true) {
            writeln!(self.output, "Tool reported an error:")?;
        }

        match result.content.first() {
            Some(content) => {
                writeln!(self.output, "Result:")?;
                writeln!(self.output, "{}", single_line(&content_text(content)))?;
            }
            None => writeln!(self.output, "(no content)")?,
        }
        Ok(())
    }

    fn report_failure(&mut self, failure: &ClientError) -> Result<(), ClientError> {
        writeln!(self.output, "Tool execution failed: {failure}")?;
        let mut source = std::error::Error::source(failure);
        while let Some(cause) = source {
            writeln!(self.output, "  caused by: {cause}")?;
            source = cause.source();
        }
        Ok(())
    }

    /// Write a prompt and read one line without its terminator.
    fn prompt(&mut self, text: &str) -> Result<String, ClientError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ClientError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

fn content_text(content: &Content) -> String {
    match &content.raw {
        RawContent::Text(text) => text.text.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Drop every line break so a result fits one terminal line.
pub fn single_line(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}
