//! Human-readable report output.

use std::io::{self, Write};

use super::styler::Styler;
use crate::report::{EntryStatus, Report};

/// Labels names the two compared inputs in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub left: String,
    pub right: String,
}

impl Labels {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Labels {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Writes a report, one block per manifest:
///
/// ```text
///
/// --- Kind: name (namespace)
/// -  old line,
/// +  new line,
/// ```
pub fn render_report(
    report: &Report,
    labels: &Labels,
    styler: &Styler,
    out: &mut dyn Write,
) -> io::Result<()> {
    for entry in report.iter() {
        writeln!(out)?;
        writeln!(out, "--- {}", entry.identity)?;

        match &entry.status {
            EntryStatus::Changed(changes) => {
                for line in changes.iter() {
                    let text = line.to_string();
                    let styled = if line.is_added() {
                        styler.added(&text)
                    } else {
                        styler.removed(&text)
                    };
                    writeln!(out, "{}", styled)?;
                }
            }
            EntryStatus::Identical => writeln!(out, "{}", styler.success("Manifests match"))?,
            EntryStatus::OnlyInRight => writeln!(
                out,
                "{}",
                styler.notice(&format!("> Present only in file: {}", labels.right))
            )?,
            EntryStatus::OnlyInLeft => writeln!(
                out,
                "{}",
                styler.notice(&format!("< Present only in file: {}", labels.left))
            )?,
        }
    }
    Ok(())
}
