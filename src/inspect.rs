//! Tag stream inspection
//!
//! Re-parses an arbitrary DXF-like text stream into section boundaries
//! and per-pair annotations for display. The scanner has no schema: it
//! recovers structure heuristically from the flat code/value stream, and
//! it never rejects input. Truncated trailing pairs are silently
//! dropped; unexpected codes are carried as opaque text.

use crate::codes::{code_kind, CODE_NAMES};
use encoding_rs::WINDOWS_1252;

/// One annotated item of a scanned stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanItem {
    /// A `(0,"SECTION")` pair opened a section boundary.
    SectionStart {
        /// 0-based source line of the code line
        line: usize,
    },
    /// A section boundary closed (next section began, or input ended).
    SectionEnd,
    /// Any other completed pair, type-marker or ordinary.
    Pair {
        /// 0-based source line of the code line
        line: usize,
        code: String,
        value: String,
    },
}

impl ScanItem {
    /// The presentation category: boundaries are `section`, everything
    /// else `other`.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScanItem::SectionStart { .. } | ScanItem::SectionEnd => "section",
            ScanItem::Pair { .. } => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutsideSection,
    InsideSection,
}

/// Schema-free scanner over DXF-like tag streams.
pub struct TagStreamScanner;

impl TagStreamScanner {
    /// Scan a text stream into annotated items.
    pub fn scan(input: &str) -> Vec<ScanItem> {
        let mut items = Vec::new();
        let mut state = State::OutsideSection;
        // Line index of a "0" code still waiting for its value.
        let mut pending_type: Option<usize> = None;
        // First line of a partially read ordinary pair.
        let mut slot: Option<(usize, String)> = None;

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(code_line) = pending_type.take() {
                if line == "SECTION" {
                    if state == State::InsideSection {
                        items.push(ScanItem::SectionEnd);
                    }
                    items.push(ScanItem::SectionStart { line: code_line });
                    state = State::InsideSection;
                } else {
                    items.push(ScanItem::Pair {
                        line: code_line,
                        code: "0".to_string(),
                        value: line.to_string(),
                    });
                }
            } else if slot.is_none() && line == "0" {
                pending_type = Some(index);
            } else if let Some((first_line, first)) = slot.take() {
                items.push(ScanItem::Pair {
                    line: first_line,
                    code: first,
                    value: line.to_string(),
                });
            } else {
                slot = Some((index, line.to_string()));
            }
        }

        if state == State::InsideSection {
            items.push(ScanItem::SectionEnd);
        }
        items
    }

    /// Scan raw bytes, decoding as UTF-8 with a Windows-1252 fallback
    /// for hand-edited or legacy files.
    pub fn scan_bytes(bytes: &[u8]) -> Vec<ScanItem> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::scan(text),
            Err(_) => {
                let (decoded, _, _) = WINDOWS_1252.decode(bytes);
                Self::scan(&decoded)
            }
        }
    }
}

/// Render scanned items as a plain-text listing, one line per item.
///
/// Numeric codes are annotated with their friendly name (when the code
/// is in [`CODE_NAMES`]) and the value kind of their code range; opaque
/// non-numeric codes get no annotation.
pub fn render_listing(items: &[ScanItem]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            ScanItem::SectionStart { line } => {
                out.push_str(&format!("{:>5}  section  0 SECTION\n", line));
            }
            ScanItem::SectionEnd => {
                out.push_str(&format!("{:>5}  section  (end of section)\n", ""));
            }
            ScanItem::Pair { line, code, value } => {
                match code.parse::<i32>() {
                    Ok(numeric) => {
                        let kind = code_kind(numeric).label();
                        let annotation = match CODE_NAMES.get(&numeric) {
                            Some(name) if *name != kind => format!("{} ({})", name, kind),
                            Some(name) => (*name).to_string(),
                            None => kind.to_string(),
                        };
                        out.push_str(&format!(
                            "{:>5}  other    {} {}  ; {}\n",
                            line, code, value, annotation
                        ));
                    }
                    Err(_) => {
                        out.push_str(&format!("{:>5}  other    {} {}\n", line, code, value));
                    }
                }
            }
        }
    }
    out
}
