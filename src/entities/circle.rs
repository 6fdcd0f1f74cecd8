//! Circle entity

use super::{emit_extrusion, emit_thickness, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A CIRCLE entity.
#[derive(Debug, Clone)]
pub struct Circle {
    pub common: EntityCommon,
    pub center: Vector3,
    pub radius: f64,
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Circle {
    /// Create a unit circle at the origin.
    pub fn new(version: AcadVersion) -> Self {
        Circle {
            common: EntityCommon::new(version),
            center: Vector3::ZERO,
            radius: 1.0,
            thickness: 0.0,
            extrusion: None,
        }
    }

    /// Create a circle with center and radius.
    pub fn from_center_radius(center: Vector3, radius: f64, version: AcadVersion) -> Self {
        Circle {
            center,
            radius,
            ..Circle::new(version)
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

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }
}

impl Entity for Circle {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::CIRCLE, subclass::CIRCLE);
        stream.add_point(10, self.center);
        stream.add(40, self.radius);
        emit_thickness(stream, self.thickness);
        emit_extrusion(stream, self.extrusion);
    }
}
