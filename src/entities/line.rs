//! Line entity

use super::{emit_extrusion, emit_thickness, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Vector3};

/// A LINE entity.
#[derive(Debug, Clone)]
pub struct Line {
    pub common: EntityCommon,
    pub start: Vector3,
    pub end: Vector3,
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Line {
    /// Create a degenerate line at the origin.
    pub fn new(version: AcadVersion) -> Self {
        Line {
            common: EntityCommon::new(version),
            start: Vector3::ZERO,
            end: Vector3::ZERO,
            thickness: 0.0,
            extrusion: None,
        }
    }

    /// Create a line between two points.
    pub fn from_points(start: Vector3, end: Vector3, version: AcadVersion) -> Self {
        Line {
            start,
            end,
            ..Line::new(version)
        }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.common.layer = layer.into();
        self
    }

    pub fn with_handle(mut self, handle: crate::types::Handle) -> Self {
        self.common.handle = handle;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }
}

impl Entity for Line {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common.emit_prelude(stream, type_name::LINE, subclass::LINE);
        stream.add_point(10, self.start);
        stream.add_point(11, self.end);
        emit_thickness(stream, self.thickness);
        emit_extrusion(stream, self.extrusion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Handle;

    #[test]
    fn test_line_r10() {
        let line = Line::from_points(
            Vector3::ZERO,
            Vector3::new(10.0, 5.0, 0.0),
            AcadVersion::R10,
        );
        assert_eq!(
            line.render(),
            "0\nLINE\n8\n0\n10\n0.0\n20\n0.0\n30\n0.0\n11\n10.0\n21\n5.0\n31\n0.0\n"
        );
    }

    #[test]
    fn test_line_r2000_has_subclass_before_coordinates() {
        let line = Line::from_points(Vector3::ZERO, Vector3::new(1.0, 1.0, 0.0), AcadVersion::R2000)
            .with_handle(Handle::new(0x60));
        let text = line.render();
        let marker = text.find("100\nAcDbLine\n").unwrap();
        let coords = text.find("10\n0.0\n").unwrap();
        assert!(marker < coords);
    }

    #[test]
    fn test_line_thickness_omitted_when_zero() {
        let flat = Line::new(AcadVersion::R10);
        assert!(!flat.render().contains("39"));
        let thick = Line::new(AcadVersion::R10).with_thickness(2.0);
        assert!(thick.render().contains("39\n2.0\n"));
    }
}
