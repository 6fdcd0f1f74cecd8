//! Text entity

use super::{emit_extrusion, emit_thickness, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, TextGenerationFlags, Vector3};

/// A TEXT entity.
#[derive(Debug, Clone)]
pub struct Text {
    pub common: EntityCommon,
    pub insertion: Vector3,
    pub height: f64,
    pub value: String,
    /// Rotation in degrees; 0.0 is omitted
    pub rotation: f64,
    /// Relative X scale; 1.0 is omitted
    pub width_factor: f64,
    /// Oblique angle in degrees; 0.0 is omitted
    pub oblique_angle: f64,
    pub style: String,
    /// Mirroring flags; the Default (empty) state is omitted
    pub generation: TextGenerationFlags,
    /// Horizontal justification; 0 (left) is omitted
    pub horizontal_justification: i64,
    /// Second alignment point, used by non-default justifications
    pub alignment: Option<Vector3>,
    /// Vertical justification; 0 (baseline) is omitted
    pub vertical_justification: i64,
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Text {
    /// Create an empty text record.
    pub fn new(version: AcadVersion) -> Self {
        Text {
            common: EntityCommon::new(version),
            insertion: Vector3::ZERO,
            height: 1.0,
            value: String::new(),
            rotation: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
            style: "STANDARD".to_string(),
            generation: TextGenerationFlags::default(),
            horizontal_justification: 0,
            alignment: None,
            vertical_justification: 0,
            thickness: 0.0,
            extrusion: None,
        }
    }

    /// Create a text record at a point.
    pub fn at(insertion: Vector3, height: f64, value: impl Into<String>, version: AcadVersion) -> Self {
        Text {
            insertion,
            height,
            value: value.into(),
            ..Text::new(version)
        }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.common.layer = layer.into();
        self
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.common.handle = handle;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_generation(mut self, generation: TextGenerationFlags) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_justification(mut self, horizontal: i64, vertical: i64, alignment: Vector3) -> Self {
        self.horizontal_justification = horizontal;
        self.vertical_justification = vertical;
        self.alignment = Some(alignment);
        self
    }

    /// Emit the text fields shared by TEXT, ATTDEF and ATTRIB.
    pub(crate) fn emit_text_fields(&self, stream: &mut GroupCodeStream) {
        stream.add_point(10, self.insertion);
        stream.add(40, self.height);
        stream.add(1, self.value.as_str());
        if self.rotation != 0.0 {
            stream.add(50, self.rotation);
        }
        if self.width_factor != 1.0 {
            stream.add(41, self.width_factor);
        }
        if self.oblique_angle != 0.0 {
            stream.add(51, self.oblique_angle);
        }
        stream.add(7, self.style.as_str());
        if !self.generation.is_empty() {
            stream.add(71, self.generation.bits());
        }
        if self.horizontal_justification != 0 {
            stream.add(72, self.horizontal_justification);
        }
        if let Some(alignment) = self.alignment {
            stream.add_point(11, alignment);
        }
        emit_thickness(stream, self.thickness);
        emit_extrusion(stream, self.extrusion);
    }
}

impl Entity for Text {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::TEXT, subclass::TEXT);
        self.emit_text_fields(stream);
        if self.vertical_justification != 0 {
            stream.add(73, self.vertical_justification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_r10_minimal() {
        let text = Text::at(Vector3::new(1.0, 2.0, 0.0), 2.5, "Q1", AcadVersion::R10);
        assert_eq!(
            text.render(),
            "0\nTEXT\n8\n0\n10\n1.0\n20\n2.0\n30\n0.0\n40\n2.5\n1\nQ1\n7\nSTANDARD\n"
        );
    }

    #[test]
    fn test_default_generation_flags_omitted() {
        let plain = Text::at(Vector3::ZERO, 1.0, "a", AcadVersion::R10);
        assert!(!plain.render().contains("71"));

        let mirrored = Text::at(Vector3::ZERO, 1.0, "a", AcadVersion::R10)
            .with_generation(TextGenerationFlags::MIRRORED_X);
        assert!(mirrored.render().contains("71\n2\n"));
    }

    #[test]
    fn test_unit_width_factor_omitted() {
        let mut text = Text::at(Vector3::ZERO, 1.0, "a", AcadVersion::R10);
        assert!(!text.render().contains("41"));
        text.width_factor = 0.8;
        assert!(text.render().contains("41\n0.8\n"));
    }

    #[test]
    fn test_justification_emits_alignment_point() {
        let text = Text::at(Vector3::ZERO, 1.0, "a", AcadVersion::R10).with_justification(
            1,
            2,
            Vector3::new(4.0, 5.0, 0.0),
        );
        let rendered = text.render();
        assert!(rendered.contains("72\n1\n"));
        assert!(rendered.contains("11\n4.0\n21\n5.0\n31\n0.0\n"));
        assert!(rendered.ends_with("73\n2\n"));
    }
}
