//! 3D face entity

use super::{Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A 3DFACE entity: a three- or four-sided surface patch.
#[derive(Debug, Clone)]
pub struct Face3d {
    pub common: EntityCommon,
    pub corners: [Vector3; 4],
    /// Invisible edge flags; 0 (all visible) is omitted
    pub edge_flags: i64,
}

impl Face3d {
    pub fn new(version: AcadVersion) -> Self {
        Face3d {
            common: EntityCommon::new(version),
            corners: [Vector3::ZERO; 4],
            edge_flags: 0,
        }
    }

    pub fn quad(a: Vector3, b: Vector3, c: Vector3, d: Vector3, version: AcadVersion) -> Self {
        Face3d {
            corners: [a, b, c, d],
            ..Face3d::new(version)
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

    pub fn with_edge_flags(mut self, flags: i64) -> Self {
        self.edge_flags = flags;
        self
    }
}

impl Entity for Face3d {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::FACE_3D, subclass::FACE);
        for (i, corner) in self.corners.iter().enumerate() {
            stream.add_point(10 + i as i32, *corner);
        }
        if self.edge_flags != 0 {
            stream.add(70, self.edge_flags);
        }
    }
}
