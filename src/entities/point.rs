//! Point entity

use super::{emit_extrusion, emit_thickness, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A POINT entity.
#[derive(Debug, Clone)]
pub struct Point {
    pub common: EntityCommon,
    pub location: Vector3,
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Point {
    pub fn new(version: AcadVersion) -> Self {
        Point {
            common: EntityCommon::new(version),
            location: Vector3::ZERO,
            thickness: 0.0,
            extrusion: None,
        }
    }

    pub fn at(location: Vector3, version: AcadVersion) -> Self {
        Point {
            location,
            ..Point::new(version)
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

impl Entity for Point {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::POINT, subclass::POINT);
        stream.add_point(10, self.location);
        emit_thickness(stream, self.thickness);
        emit_extrusion(stream, self.extrusion);
    }
}
