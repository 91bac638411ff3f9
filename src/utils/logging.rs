//! Transcript logging to a plain-text file.

use crate::core::message::Message;
use crate::utils::text::format_date_br;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct LoggingState {
    file_path: Option<PathBuf>,
    is_active: bool,
}

impl LoggingState {
    /// A path given on the command line starts logging immediately.
    pub fn new(log_file: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut logging = LoggingState {
            file_path: None,
            is_active: false,
        };
        if let Some(path) = log_file {
            logging.set_log_file(path)?;
        }
        Ok(logging)
    }

    pub fn set_log_file(&mut self, path: PathBuf) -> Result<String, Box<dyn std::error::Error>> {
        // Fail early if the file cannot be created or appended to
        OpenOptions::new().create(true).append(true).open(&path)?;

        let message = format!("Logging enabled to: {}", path.display());
        self.file_path = Some(path);
        self.is_active = true;
        Ok(message)
    }

    pub fn toggle_logging(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        match &self.file_path {
            Some(path) => {
                self.is_active = !self.is_active;
                if self.is_active {
                    Ok(format!("Logging resumed to: {}", path.display()))
                } else {
                    Ok(format!("Logging paused (file: {})", path.display()))
                }
            }
            None => Err("No log file specified. Start with --log <file> to enable logging.".into()),
        }
    }

    pub fn log_message(&self, message: &Message) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_ref().filter(|_| self.is_active) else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        let timestamp = message.timestamp();
        writeln!(
            writer,
            "[{} {}] {}:",
            format_date_br(timestamp.date_naive()),
            message.time_label(),
            message.origin().display_name()
        )?;
        for line in message.text().lines() {
            writeln!(writer, "{line}")?;
        }
        // Blank line between messages, as on screen
        writeln!(writer)?;

        writer.flush()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn get_status_string(&self) -> String {
        match (&self.file_path, self.is_active) {
            (None, _) => "disabled".to_string(),
            (Some(path), true) => format!("active ({})", file_name(path)),
            (Some(path), false) => format!("paused ({})", file_name(path)),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_header_and_body_per_message() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("transcript.log");
        let logging = LoggingState::new(Some(path.clone())).expect("logging");

        logging
            .log_message(&Message::user("Como cadastrar?"))
            .expect("log user");
        logging
            .log_message(&Message::bot("Linha um\nLinha dois"))
            .expect("log bot");

        let contents = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].ends_with("] Você:"));
        assert_eq!(lines[1], "Como cadastrar?");
        assert_eq!(lines[2], "");
        assert!(lines[3].ends_with("] Assistente:"));
        assert_eq!(&lines[4..6], &["Linha um", "Linha dois"]);
    }

    #[test]
    fn paused_logging_writes_nothing() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("transcript.log");
        let mut logging = LoggingState::new(Some(path.clone())).expect("logging");

        let status = logging.toggle_logging().expect("toggle");
        assert!(status.starts_with("Logging paused"));
        assert_eq!(logging.get_status_string(), "paused (transcript.log)");

        logging.log_message(&Message::user("oi")).expect("log");
        assert_eq!(fs::read_to_string(&path).expect("read"), "");
    }

    #[test]
    fn toggle_without_file_is_an_error() {
        let mut logging = LoggingState::new(None).expect("logging");
        assert!(logging.toggle_logging().is_err());
        assert_eq!(logging.get_status_string(), "disabled");
        assert!(!logging.is_active());
    }
}
