//! Geometric entity builders
//!
//! One builder per entity kind. Every builder emits its group codes in a
//! fixed, format-mandated order: type marker, layer, then the
//! version-gated handle and subclass markers, then the entity's own
//! fields. Optional fields equal to their no-op sentinel (thickness 0.0,
//! scale factor 1.0, absent extrusion, Default text generation) are
//! omitted entirely, not emitted with a default value.

use crate::codes::subclass;
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Color, Handle, LineWeight, Vector3};

pub mod arc;
pub mod attdef;
pub mod block;
pub mod circle;
pub mod face3d;
pub mod insert;
pub mod line;
pub mod point;
pub mod polyline;
pub mod solid;
pub mod text;

pub use arc::Arc;
pub use attdef::{Attdef, Attrib};
pub use block::Block;
pub use circle::Circle;
pub use face3d::Face3d;
pub use insert::Insert;
pub use line::Line;
pub use point::Point;
pub use polyline::{Lwpolyline, LwVertex, Polyline, Seqend, Vertex};
pub use solid::{Solid, Trace};
pub use text::Text;

/// Data every entity carries: identity, owning version, layer, and the
/// common display fields.
#[derive(Debug, Clone)]
pub struct EntityCommon {
    pub version: AcadVersion,
    pub handle: Handle,
    pub layer: String,
    pub color: Color,
    pub line_weight: LineWeight,
}

impl EntityCommon {
    /// Create common entity data on layer "0".
    pub fn new(version: AcadVersion) -> Self {
        EntityCommon {
            version,
            handle: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
            line_weight: LineWeight::Default,
        }
    }

    /// Emit the common prelude: type marker, layer, version-gated handle
    /// and subclass markers, then the optional common display fields.
    pub(crate) fn emit_prelude(
        &self,
        stream: &mut GroupCodeStream,
        type_name: &'static str,
        entity_subclass: &'static str,
    ) {
        stream.add(0, type_name);
        stream.add(8, self.layer.as_str());
        if self.version.supports_handles() {
            stream.add(5, self.handle);
            stream.add(100, subclass::ENTITY);
            stream.add(100, entity_subclass);
        }
        if !self.color.is_by_layer() {
            stream.add(62, self.color.aci());
        }
        if self.version.supports_extended_symbol_data() && !self.line_weight.is_default() {
            stream.add(370, self.line_weight.value());
        }
    }
}

/// A graphical record that can appear in the ENTITIES section or inside
/// a block definition.
pub trait Entity {
    /// The entity's common data.
    fn common(&self) -> &EntityCommon;

    /// Render the entity's group-code sequence.
    fn emit(&self, stream: &mut GroupCodeStream);

    /// Render the entity to a standalone string.
    fn render(&self) -> String {
        let mut stream = GroupCodeStream::new();
        self.emit(&mut stream);
        stream.build()
    }
}

/// Thickness 0.0 is the no-op sentinel and is omitted.
pub(crate) fn emit_thickness(stream: &mut GroupCodeStream, thickness: f64) {
    if thickness != 0.0 {
        stream.add(39, thickness);
    }
}

/// An absent extrusion direction is the no-op sentinel and is omitted.
pub(crate) fn emit_extrusion(stream: &mut GroupCodeStream, extrusion: Option<Vector3>) {
    if let Some(direction) = extrusion {
        stream.add_point(210, direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_r10_is_type_and_layer_only() {
        let common = EntityCommon::new(AcadVersion::R10);
        let mut stream = GroupCodeStream::new();
        common.emit_prelude(&mut stream, "LINE", subclass::LINE);
        assert_eq!(stream.build(), "0\nLINE\n8\n0\n");
    }

    #[test]
    fn test_prelude_r2000_adds_handle_then_subclasses() {
        let mut common = EntityCommon::new(AcadVersion::R2000);
        common.handle = Handle::new(0x4B);
        let mut stream = GroupCodeStream::new();
        common.emit_prelude(&mut stream, "LINE", subclass::LINE);
        assert_eq!(
            stream.build(),
            "0\nLINE\n8\n0\n5\n4B\n100\nAcDbEntity\n100\nAcDbLine\n"
        );
    }

    #[test]
    fn test_by_layer_color_is_omitted() {
        let mut common = EntityCommon::new(AcadVersion::R10);
        let mut stream = GroupCodeStream::new();
        common.emit_prelude(&mut stream, "LINE", subclass::LINE);
        assert!(!stream.as_str().contains("62"));

        common.color = Color::RED;
        let mut stream = GroupCodeStream::new();
        common.emit_prelude(&mut stream, "LINE", subclass::LINE);
        assert!(stream.as_str().contains("62\n1\n"));
    }

    #[test]
    fn test_zero_thickness_is_omitted() {
        let mut stream = GroupCodeStream::new();
        emit_thickness(&mut stream, 0.0);
        assert!(stream.is_empty());
        emit_thickness(&mut stream, 1.5);
        assert_eq!(stream.build(), "39\n1.5\n");
    }

    #[test]
    fn test_absent_extrusion_is_omitted() {
        let mut stream = GroupCodeStream::new();
        emit_extrusion(&mut stream, None);
        assert!(stream.is_empty());
        emit_extrusion(&mut stream, Some(Vector3::UNIT_Z));
        assert_eq!(stream.build(), "210\n0.0\n220\n0.0\n230\n1.0\n");
    }
}
