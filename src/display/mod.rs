//! Message sinks for customer-facing text.
//!
//! The machine reports selections, amounts due and warnings through a
//! [`MessageSink`]. Sinks are fire-and-forget: they return nothing and the
//! machine never waits on them.

use std::io::{self, Write};
use tracing::error;

const WARNING_PREFIX: &str = "WARNING! ";

/// Receiver of display text.
pub trait MessageSink {
    fn display_message(&mut self, message: &str);

    fn display_warning(&mut self, warning: &str);
}

/// Writes each message as one line to an output stream.
///
/// Warnings are prefixed with `WARNING! `. Write failures are logged and
/// otherwise ignored.
///
/// # Example
///
/// ```rust
/// use coinbox::display::{ConsoleDisplay, MessageSink};
///
/// let mut display = ConsoleDisplay::new(Vec::new());
/// display.display_message("cola drink 2.44");
/// display.display_warning("No change!");
///
/// let output = String::from_utf8(display.into_inner()).unwrap();
/// assert_eq!(output, "cola drink 2.44\nWARNING! No change!\n");
/// ```
pub struct ConsoleDisplay<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleDisplay {
    /// Display writing to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            error!(%err, "failed to write display line");
        }
    }
}

impl<W: Write> MessageSink for ConsoleDisplay<W> {
    fn display_message(&mut self, message: &str) {
        self.write_line(message);
    }

    fn display_warning(&mut self, warning: &str) {
        self.write_line(&format!("{WARNING_PREFIX}{warning}"));
    }
}

/// One line shown by a [`RecordingDisplay`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DisplayEvent {
    Message(String),
    Warning(String),
}

/// Keeps every displayed line in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DisplayEvent::Message(text) => Some(text.as_str()),
                DisplayEvent::Warning(_) => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DisplayEvent::Warning(text) => Some(text.as_str()),
                DisplayEvent::Message(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl MessageSink for RecordingDisplay {
    fn display_message(&mut self, message: &str) {
        self.events.push(DisplayEvent::Message(message.to_string()));
    }

    fn display_warning(&mut self, warning: &str) {
        self.events.push(DisplayEvent::Warning(warning.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_writes_message_line() {
        let mut display = ConsoleDisplay::new(Vec::new());

        display.display_message("example message");

        assert_eq!(display.into_inner(), b"example message\n");
    }

    #[test]
    fn console_prefixes_warnings() {
        let mut display = ConsoleDisplay::new(Vec::new());

        display.display_warning("No change!");

        assert_eq!(display.into_inner(), b"WARNING! No change!\n");
    }

    #[test]
    fn console_swallows_write_errors() {
        let mut display = ConsoleDisplay::new(FailingWriter);
        display.display_message("lost");
        display.display_warning("lost too");
    }

    #[test]
    fn recording_display_keeps_order() {
        let mut display = RecordingDisplay::new();

        display.display_message("one");
        display.display_warning("two");
        display.display_message("three");

        assert_eq!(
            display.events(),
            &[
                DisplayEvent::Message("one".to_string()),
                DisplayEvent::Warning("two".to_string()),
                DisplayEvent::Message("three".to_string()),
            ]
        );
        assert_eq!(display.messages(), vec!["one", "three"]);
        assert_eq!(display.warnings(), vec!["two"]);

        display.clear();
        assert!(display.events().is_empty());
    }
}
