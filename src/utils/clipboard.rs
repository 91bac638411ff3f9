use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("cmd", &["/C", "clip"])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Copy text through the first platform clipboard command that works.
pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut last_error = None;
    for (cmd, args) in CANDIDATES {
        match run_with_stdin(cmd, args, text) {
            Ok(()) => return Ok(()),
            Err(err) => {
                debug!("clipboard command {cmd} failed: {err}");
                last_error = Some(err);
            }
        }
    }
    if CANDIDATES.len() > 1 {
        Err("No clipboard command found (install wl-copy, xclip, or xsel)".to_string())
    } else {
        Err(last_error.unwrap_or_else(|| "Clipboard unavailable".to_string()))
    }
}

fn run_with_stdin(cmd: &str, args: &[&str], input: &str) -> Result<(), String> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| format!("Clipboard command `{cmd}` not available"))?;

    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }
    match child.wait() {
        Ok(status) if status.success() => Ok(()),
        _ => Err(format!("Clipboard command `{cmd}` failed")),
    }
}
