//! Text style table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, TextGenerationFlags};

/// A STYLE table record.
#[derive(Debug, Clone)]
pub struct Style {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    /// Fixed text height; 0.0 means not fixed
    pub fixed_height: f64,
    pub width_factor: f64,
    pub oblique_angle: f64,
    pub generation: TextGenerationFlags,
    /// Height of the most recently used text
    pub last_height: f64,
    pub font_file: String,
    pub big_font_file: String,
}

impl Style {
    /// Create a text style with the format-mandated defaults.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Style {
            version,
            handle: Handle::NULL,
            name: name.into(),
            fixed_height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            generation: TextGenerationFlags::default(),
            last_height: 0.0,
            font_file: "txt".to_string(),
            big_font_file: String::new(),
        }
    }

    /// The STANDARD style every document carries.
    pub fn standard(version: AcadVersion) -> Self {
        Style::new("STANDARD", version)
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_fixed_height(mut self, height: f64) -> Self {
        self.fixed_height = height;
        self
    }

    pub fn with_width_factor(mut self, factor: f64) -> Self {
        self.width_factor = factor;
        self
    }

    pub fn with_font_file(mut self, font: impl Into<String>) -> Self {
        self.font_file = font.into();
        self
    }
}

impl TableRecord for Style {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::STYLE,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::TEXT_STYLE_TABLE_RECORD,
        );
        stream.add(70, 0);
        stream.add(40, self.fixed_height);
        stream.add(41, self.width_factor);
        stream.add(50, self.oblique_angle);
        stream.add(71, self.generation.bits());
        stream.add(42, self.last_height);
        stream.add(3, self.font_file.as_str());
        stream.add(4, self.big_font_file.as_str());
    }
}
