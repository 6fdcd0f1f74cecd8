//! User coordinate system table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A UCS table record.
#[derive(Debug, Clone)]
pub struct Ucs {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    pub origin: Vector3,
    pub x_axis: Vector3,
    pub y_axis: Vector3,
}

impl Ucs {
    /// Create a world-aligned UCS.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Ucs {
            version,
            handle: Handle::NULL,
            name: name.into(),
            origin: Vector3::ZERO,
            x_axis: Vector3::new(1.0, 0.0, 0.0),
            y_axis: Vector3::new(0.0, 1.0, 0.0),
        }
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_origin(mut self, origin: Vector3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_axes(mut self, x_axis: Vector3, y_axis: Vector3) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }
}

impl TableRecord for Ucs {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::UCS,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::UCS_TABLE_RECORD,
        );
        stream.add(70, 0);
        stream.add_point(10, self.origin);
        stream.add_point(11, self.x_axis);
        stream.add_point(12, self.y_axis);
    }
}
