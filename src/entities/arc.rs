//! Arc entity

use super::{emit_extrusion, emit_thickness, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// An ARC entity.
///
/// Arcs share the circle subclass for their center and radius; the
/// AcDbArc marker precedes the angle fields.
#[derive(Debug, Clone)]
pub struct Arc {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Arc {
    /// Create a unit half-arc at the origin.
    pub fn new(version: AcadVersion) -> Self {
        Arc {
            common: EntityCommon::new(version),
            center: Vector3::ZERO,
            radius: 1.0,
            start_angle: 0.0,
            end_angle: 180.0,
            thickness: 0.0,
            extrusion: None,
        }
    }

    /// Create an arc from center, radius and angles in degrees.
    pub fn from_center(
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        version: AcadVersion,
    ) -> Self {
        Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ..Arc::new(version)
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
}

impl Entity for Arc {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::ARC, subclass::CIRCLE);
        stream.add_point(10, self.center);
        stream.add(40, self.radius);
        emit_thickness(stream, self.thickness);
        if self.common.version.supports_handles() {
            stream.add(100, subclass::ARC);
        }
        stream.add(50, self.start_angle);
        stream.add(51, self.end_angle);
        emit_extrusion(stream, self.extrusion);
    }
}
