//! Terminal rendering of the chat transcript

use chat_application::ports::transcript_view::TranscriptView;
use chat_domain::{EntryId, EntryKind, TranscriptEntry};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// How the pending entry is currently displayed.
enum PendingDisplay {
    Spinner(ProgressBar),
    Line,
}

/// [`TranscriptView`] that prints entries to a terminal.
///
/// The terminal is append-only, so only the pending entry can be taken back:
/// it is drawn as a spinner that is cleared on removal. Without progress
/// display it is printed as a plain line and stays visible.
pub struct TerminalTranscript {
    color: bool,
    show_progress: bool,
    out: Mutex<Box<dyn Write + Send>>,
    pending: Mutex<Option<(EntryId, PendingDisplay)>>,
}

impl TerminalTranscript {
    /// Render to stdout.
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Render to an arbitrary writer.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            color: true,
            show_progress: true,
            out: Mutex::new(out),
            pending: Mutex::new(None),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Format an entry as a single transcript line (without newline).
    pub fn format_entry(&self, kind: &EntryKind) -> String {
        let label = format!("{}:", kind.sender());
        if !self.color {
            return format!("{} {}", label, kind.text());
        }

        match kind {
            EntryKind::User(text) => format!("{} {}", label.cyan().bold(), text),
            EntryKind::BotReply(text) => format!("{} {}", label.green().bold(), text),
            EntryKind::Pending => format!("{} {}", label.green().bold(), kind.text().dimmed()),
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn show_pending(&self, id: EntryId) {
        let display = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_prefix("Bot:");
            pb.set_message(EntryKind::Pending.text().to_string());
            pb.enable_steady_tick(Duration::from_millis(100));
            PendingDisplay::Spinner(pb)
        } else {
            self.write_line(&self.format_entry(&EntryKind::Pending));
            PendingDisplay::Line
        };

        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some((id, display));
        }
    }
}

impl Default for TerminalTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptView for TerminalTranscript {
    fn append(&self, entry: &TranscriptEntry) {
        match &entry.kind {
            EntryKind::Pending => self.show_pending(entry.id),
            kind => self.write_line(&self.format_entry(kind)),
        }
    }

    fn remove(&self, id: EntryId) {
        let Ok(mut pending) = self.pending.lock() else {
            return;
        };
        if !matches!(pending.as_ref(), Some((pending_id, _)) if *pending_id == id) {
            return;
        }
        if let Some((_, PendingDisplay::Spinner(pb))) = pending.take() {
            pb.finish_and_clear();
        }
    }

    fn scroll_to_bottom(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}
