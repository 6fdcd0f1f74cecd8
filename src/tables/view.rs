//! View table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A VIEW table record.
#[derive(Debug, Clone)]
pub struct View {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    pub height: f64,
    pub width: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub direction: Vector3,
    pub target: Vector3,
    pub lens_length: f64,
    pub front_clip: f64,
    pub back_clip: f64,
    pub twist_angle: f64,
    pub mode: i64,
}

impl View {
    /// Create a plan view with the format-mandated defaults.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        View {
            version,
            handle: Handle::NULL,
            name: name.into(),
            height: 1.0,
            width: 1.0,
            center_x: 0.0,
            center_y: 0.0,
            direction: Vector3::UNIT_Z,
            target: Vector3::ZERO,
            lens_length: 50.0,
            front_clip: 0.0,
            back_clip: 0.0,
            twist_angle: 0.0,
            mode: 0,
        }
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_extent(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center_x = x;
        self.center_y = y;
        self
    }
}

impl TableRecord for View {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::VIEW,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::VIEW_TABLE_RECORD,
        );
        stream.add(70, 0);
        stream.add(40, self.height);
        stream.add_point_2d(10, self.center_x, self.center_y);
        stream.add(41, self.width);
        stream.add_point(11, self.direction);
        stream.add_point(12, self.target);
        stream.add(42, self.lens_length);
        stream.add(43, self.front_clip);
        stream.add(44, self.back_clip);
        stream.add(50, self.twist_angle);
        stream.add(71, self.mode);
    }
}
