//! Progress display for evaluation runs.
//!
//! TTY output uses compact, single-line overwrite between persistent
//! boundaries. Non-TTY output uses plain text with one line per stage and
//! no ANSI codes.

use std::io::Write;
use std::time::Instant;

use pc_protocol::Stage;

/// Encapsulates all stderr formatting while an evaluation is in flight.
pub struct ProgressReporter<W: Write> {
    pub writer: W,
    is_tty: bool,
    start_time: Instant,
    idea_summary: String,
    term_width: u16,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(writer: W, is_tty: bool, idea: &str) -> Self {
        let term_width = if is_tty {
            crossterm::terminal::size().map(|(w, _)| w).unwrap_or(80)
        } else {
            80
        };

        let summary: String = idea.chars().take(60).collect();
        let idea_summary = if idea.chars().count() > 60 {
            format!("{summary}...")
        } else {
            summary
        };

        Self {
            writer,
            is_tty,
            start_time: Instant::now(),
            idea_summary,
            term_width,
        }
    }

    fn prefix(&self) -> &'static str {
        "[pc]"
    }

    /// Prefix with dim cyan color for TTY mode.
    fn colored_prefix(&self) -> String {
        if self.is_tty {
            format!("\x1b[2m\x1b[36m{}\x1b[0m", self.prefix())
        } else {
            self.prefix().to_string()
        }
    }

    /// Truncate a string to fit within terminal width minus the prefix and
    /// padding.
    fn truncate_to_width(&self, s: &str) -> String {
        let prefix_len = self.prefix().len() + 1;
        let max_content = (self.term_width as usize).saturating_sub(prefix_len);
        if s.len() > max_content && max_content > 3 {
            let mut truncated: String = s.chars().take(max_content - 3).collect();
            truncated.push_str("...");
            truncated
        } else {
            s.to_string()
        }
    }

    /// Emit the start boundary line (persists).
    pub fn emit_start(&mut self) {
        if self.is_tty {
            let _ = writeln!(
                self.writer,
                "{} \x1b[36m---\x1b[0m \"{}\"",
                self.colored_prefix(),
                self.idea_summary
            );
        } else {
            let _ = writeln!(
                self.writer,
                "{} --- \"{}\"",
                self.prefix(),
                self.idea_summary
            );
        }
    }

    /// Emit a stage update (overwritten in TTY mode).
    pub fn emit_stage(&mut self, stage: Stage) {
        let percent = (stage.fraction() * 100.0) as u32;
        let line = self.truncate_to_width(&format!("({percent:>3}%) {}", stage.description()));
        if self.is_tty {
            let _ = write!(
                self.writer,
                "\r\x1b[K{} \x1b[2m{}\x1b[0m",
                self.colored_prefix(),
                line,
            );
        } else {
            let _ = writeln!(self.writer, "{} {}", self.prefix(), line);
        }
        let _ = self.writer.flush();
    }

    /// Emit an error (persists — red).
    pub fn emit_error(&mut self, msg: &str) {
        if self.is_tty {
            let _ = writeln!(
                self.writer,
                "\r\x1b[K{} \x1b[31merror: {}\x1b[0m",
                self.colored_prefix(),
                msg,
            );
        } else {
            let _ = writeln!(self.writer, "{} error: {}", self.prefix(), msg);
        }
    }

    /// Emit the done boundary line (persists).
    pub fn emit_done(&mut self) {
        let elapsed = self.start_time.elapsed().as_secs();
        if self.is_tty {
            let _ = writeln!(
                self.writer,
                "\r\x1b[K{} \x1b[36m---\x1b[0m \x1b[2mdone ({elapsed}s)\x1b[0m",
                self.colored_prefix(),
            );
        } else {
            let _ = writeln!(self.writer, "{} --- done ({elapsed}s)", self.prefix());
        }
    }
}
