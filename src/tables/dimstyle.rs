//! Dimension style table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle};

/// A DIMSTYLE table record.
///
/// DIMSTYLE is the one record kind whose handle is written under group
/// code 105 instead of 5, a documented format irregularity.
#[derive(Debug, Clone)]
pub struct Dimstyle {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    /// Suffix for primary dimension text
    pub post: String,
    /// Suffix for alternate dimension text
    pub alternate_post: String,
    pub scale: f64,
    pub arrow_size: f64,
    pub extension_line_offset: f64,
    pub extension_line_extend: f64,
    pub text_height: f64,
    pub center_mark_size: f64,
}

impl Dimstyle {
    /// Create a dimension style with the format-mandated defaults.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Dimstyle {
            version,
            handle: Handle::NULL,
            name: name.into(),
            post: String::new(),
            alternate_post: String::new(),
            scale: 1.0,
            arrow_size: 0.18,
            extension_line_offset: 0.0625,
            extension_line_extend: 0.18,
            text_height: 0.18,
            center_mark_size: 0.09,
        }
    }

    /// The STANDARD dimension style every document carries.
    pub fn standard(version: AcadVersion) -> Self {
        Dimstyle::new("STANDARD", version)
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_text_height(mut self, height: f64) -> Self {
        self.text_height = height;
        self
    }
}

impl TableRecord for Dimstyle {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::DIMSTYLE,
            &self.name,
            self.version,
            self.handle,
            105,
            subclass::DIM_STYLE_TABLE_RECORD,
        );
        stream.add(70, 0);
        stream.add(3, self.post.as_str());
        stream.add(4, self.alternate_post.as_str());
        stream.add(40, self.scale);
        stream.add(41, self.arrow_size);
        stream.add(42, self.extension_line_offset);
        stream.add(44, self.extension_line_extend);
        stream.add(140, self.text_height);
        stream.add(141, self.center_mark_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimstyle_handle_uses_code_105() {
        let style = Dimstyle::standard(AcadVersion::R2000).with_handle(Handle::new(0x2A));
        let text = style.render();
        assert!(text.contains("105\n2A\n"));
        assert!(!text.contains("\n5\n2A\n"));
    }

    #[test]
    fn test_dimstyle_r10_has_no_handle() {
        let style = Dimstyle::standard(AcadVersion::R10).with_handle(Handle::new(0x2A));
        let text = style.render();
        assert!(!text.contains("105"));
        assert!(!text.contains("AcDb"));
    }

    #[test]
    fn test_dimstyle_defaults() {
        let text = Dimstyle::standard(AcadVersion::R10).render();
        assert!(text.contains("40\n1.0\n"));
        assert!(text.contains("140\n0.18\n"));
        assert!(text.contains("141\n0.09\n"));
    }
}
