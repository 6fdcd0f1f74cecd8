//! Block reference entity

use super::{emit_extrusion, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// An INSERT entity: a placed reference to a block definition.
///
/// Scale factors equal to 1.0, zero rotation, and 1x1 arrays are no-op
/// sentinels and are omitted.
#[derive(Debug, Clone)]
pub struct Insert {
    pub common: EntityCommon,
    pub block_name: String,
    pub insertion: Vector3,
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
    /// Rotation in degrees
    pub rotation: f64,
    pub column_count: i64,
    pub row_count: i64,
    pub column_spacing: f64,
    pub row_spacing: f64,
    /// Whether ATTRIB entities follow this reference
    pub has_attributes: bool,
    pub extrusion: Option<Vector3>,
}

impl Insert {
    /// Create a reference to `block_name` at the origin.
    pub fn new(block_name: impl Into<String>, version: AcadVersion) -> Self {
        Insert {
            common: EntityCommon::new(version),
            block_name: block_name.into(),
            insertion: Vector3::ZERO,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
            has_attributes: false,
            extrusion: None,
        }
    }

    /// Create a reference placed at a point.
    pub fn at(block_name: impl Into<String>, insertion: Vector3, version: AcadVersion) -> Self {
        Insert {
            insertion,
            ..Insert::new(block_name, version)
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

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale_x = scale;
        self.scale_y = scale;
        self.scale_z = scale;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_attributes(mut self) -> Self {
        self.has_attributes = true;
        self
    }
}

impl Entity for Insert {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::INSERT, subclass::BLOCK_REFERENCE);
        if self.has_attributes {
            stream.add(66, 1);
        }
        stream.add(2, self.block_name.as_str());
        stream.add_point(10, self.insertion);
        if self.scale_x != 1.0 {
            stream.add(41, self.scale_x);
        }
        if self.scale_y != 1.0 {
            stream.add(42, self.scale_y);
        }
        if self.scale_z != 1.0 {
            stream.add(43, self.scale_z);
        }
        if self.rotation != 0.0 {
            stream.add(50, self.rotation);
        }
        if self.column_count != 1 {
            stream.add(70, self.column_count);
        }
        if self.row_count != 1 {
            stream.add(71, self.row_count);
        }
        if self.column_spacing != 0.0 {
            stream.add(44, self.column_spacing);
        }
        if self.row_spacing != 0.0 {
            stream.add(45, self.row_spacing);
        }
        emit_extrusion(stream, self.extrusion);
    }
}
