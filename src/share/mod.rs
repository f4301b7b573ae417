//! Handing the finished report to the outside world.
//!
//! Both actions take the report text verbatim.

use std::{
    io::{ErrorKind, Write},
    process::{Command, Stdio},
};

use url::Url;

use crate::errors::{ReportError, Result};

const WHATSAPP_BASE: &str = "https://wa.me/";

pub const COPIED_NOTICE: &str = "Report copied to clipboard! Open WhatsApp and paste.";

/// Clipboard and messaging collaborators for the finished report.
pub trait Distributor {
    fn copy(&self, report: &str) -> Result<()>;
    fn share(&self, report: &str) -> Result<()>;
}

/// Deep-link that opens WhatsApp with `report` pre-filled.
pub fn whatsapp_link(report: &str) -> Result<Url> {
    let mut url = Url::parse(WHATSAPP_BASE)?;
    url.query_pairs_mut().append_pair("text", report);
    Ok(url)
}

/// Uses whatever clipboard and URL-opener commands the host provides.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDistributor;

const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

const OPENER_COMMANDS: &[(&str, &[&str])] = &[
    ("xdg-open", &[]),
    ("open", &[]),
    ("cmd", &["/C", "start", ""]),
];

impl Distributor for SystemDistributor {
    fn copy(&self, report: &str) -> Result<()> {
        for (program, args) in CLIPBOARD_COMMANDS {
            match pipe_to(program, args, report) {
                Ok(()) => {
                    tracing::debug!(program, "report copied to clipboard");
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => {
                    tracing::warn!(program, error = %err, "clipboard command failed");
                    continue;
                }
            }
        }
        Err(ReportError::Environment(
            "Clipboard is not available on this system.".into(),
        ))
    }

    fn share(&self, report: &str) -> Result<()> {
        let link = whatsapp_link(report)?;
        for (program, args) in OPENER_COMMANDS {
            let status = Command::new(program)
                .args(*args)
                .arg(link.as_str())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            match status {
                Ok(status) if status.success() => return Ok(()),
                Ok(_) => continue,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => {
                    tracing::warn!(program, error = %err, "link opener failed");
                    continue;
                }
            }
        }
        Err(ReportError::Environment(format!(
            "Could not open WhatsApp. Open this link manually:\n{link}"
        )))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }
    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            ErrorKind::Other,
            format!("{program} exited with {status}"),
        ))
    }
}
