//! Solid and trace entities
//!
//! Both are filled quadrilaterals with the same field layout; TRACE
//! differs only in its type marker and subclass.

use super::{emit_extrusion, emit_thickness, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A SOLID entity: a filled triangle or quadrilateral.
///
/// For a triangle the fourth corner repeats the third, per the format.
#[derive(Debug, Clone)]
pub struct Solid {
    pub common: EntityCommon,
    pub corners: [Vector3; 4],
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Solid {
    pub fn new(version: AcadVersion) -> Self {
        Solid {
            common: EntityCommon::new(version),
            corners: [Vector3::ZERO; 4],
            thickness: 0.0,
            extrusion: None,
        }
    }

    /// Create a triangle; the fourth corner repeats the third.
    pub fn triangle(a: Vector3, b: Vector3, c: Vector3, version: AcadVersion) -> Self {
        Solid {
            corners: [a, b, c, c],
            ..Solid::new(version)
        }
    }

    /// Create a quadrilateral.
    pub fn quad(a: Vector3, b: Vector3, c: Vector3, d: Vector3, version: AcadVersion) -> Self {
        Solid {
            corners: [a, b, c, d],
            ..Solid::new(version)
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

fn emit_corners(stream: &mut GroupCodeStream, corners: &[Vector3; 4]) {
    for (i, corner) in corners.iter().enumerate() {
        stream.add_point(10 + i as i32, *corner);
    }
}

impl Entity for Solid {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::SOLID, subclass::TRACE);
        emit_corners(stream, &self.corners);
        emit_thickness(stream, self.thickness);
        emit_extrusion(stream, self.extrusion);
    }
}

/// A TRACE entity: same layout as SOLID.
#[derive(Debug, Clone)]
pub struct Trace {
    pub common: EntityCommon,
    pub corners: [Vector3; 4],
    pub thickness: f64,
    pub extrusion: Option<Vector3>,
}

impl Trace {
    pub fn new(version: AcadVersion) -> Self {
        Trace {
            common: EntityCommon::new(version),
            corners: [Vector3::ZERO; 4],
            thickness: 0.0,
            extrusion: None,
        }
    }

    pub fn quad(a: Vector3, b: Vector3, c: Vector3, d: Vector3, version: AcadVersion) -> Self {
        Trace {
            corners: [a, b, c, d],
            ..Trace::new(version)
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

impl Entity for Trace {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::TRACE, subclass::TRACE);
        emit_corners(stream, &self.corners);
        emit_thickness(stream, self.thickness);
        emit_extrusion(stream, self.extrusion);
    }
}
