//! AutoCAD database version gating
//!
//! Feature availability in the DXF stream is monotonic in the version
//! ordinal: anything a record emits under version N it also emits under
//! every version after N.

use crate::error::{DxfError, Result};
use std::fmt;

/// AutoCAD database versions supported by the encoder, oldest first.
///
/// Ordinal comparison is the sole gating mechanism. Handles and subclass
/// markers exist strictly after [`AcadVersion::R11_12`]; a small number of
/// late fields (block descriptions, lineweights) exist strictly after
/// [`AcadVersion::R14`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AcadVersion {
    /// AutoCAD Release 10 (AC1006)
    R10,
    /// AutoCAD Release 11/12 (AC1009)
    R11_12,
    /// AutoCAD Release 13 (AC1012)
    R13,
    /// AutoCAD Release 14 (AC1014)
    R14,
    /// AutoCAD 2000 (AC1015)
    R2000,
}

impl AcadVersion {
    /// All versions, oldest first.
    pub const ALL: [AcadVersion; 5] = [
        AcadVersion::R10,
        AcadVersion::R11_12,
        AcadVersion::R13,
        AcadVersion::R14,
        AcadVersion::R2000,
    ];

    /// The database version string written to `$ACADVER`.
    pub const fn dxf_string(self) -> &'static str {
        match self {
            AcadVersion::R10 => "AC1006",
            AcadVersion::R11_12 => "AC1009",
            AcadVersion::R13 => "AC1012",
            AcadVersion::R14 => "AC1014",
            AcadVersion::R2000 => "AC1015",
        }
    }

    /// Parse a database version string (`"AC1006"` .. `"AC1015"`).
    /// Anything else is [`DxfError::UnsupportedVersion`].
    pub fn from_dxf_string(s: &str) -> Result<Self> {
        match s {
            "AC1006" => Ok(AcadVersion::R10),
            "AC1009" => Ok(AcadVersion::R11_12),
            "AC1012" => Ok(AcadVersion::R13),
            "AC1014" => Ok(AcadVersion::R14),
            "AC1015" => Ok(AcadVersion::R2000),
            _ => Err(DxfError::UnsupportedVersion(s.to_string())),
        }
    }

    /// Handles (codes 5/105) and subclass markers (code 100) exist from
    /// R13 onward.
    #[inline]
    pub fn supports_handles(self) -> bool {
        self > AcadVersion::R11_12
    }

    /// Block description strings and lineweight codes exist from R2000
    /// onward.
    #[inline]
    pub fn supports_extended_symbol_data(self) -> bool {
        self > AcadVersion::R14
    }
}

impl Default for AcadVersion {
    fn default() -> Self {
        AcadVersion::R2000
    }
}

impl fmt::Display for AcadVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dxf_string())
    }
}
