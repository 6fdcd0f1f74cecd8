//! Viewport configuration table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, Vector3};

/// A VPORT table record.
#[derive(Debug, Clone)]
pub struct Vport {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    pub lower_left: (f64, f64),
    pub upper_right: (f64, f64),
    pub center: (f64, f64),
    pub snap_base: (f64, f64),
    pub snap_spacing: (f64, f64),
    pub grid_spacing: (f64, f64),
    pub view_direction: Vector3,
    pub view_target: Vector3,
    pub view_height: f64,
    pub aspect_ratio: f64,
    pub lens_length: f64,
    pub front_clip: f64,
    pub back_clip: f64,
    pub snap_angle: f64,
    pub twist_angle: f64,
}

impl Vport {
    /// Create a viewport with the format-mandated defaults.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Vport {
            version,
            handle: Handle::NULL,
            name: name.into(),
            lower_left: (0.0, 0.0),
            upper_right: (1.0, 1.0),
            center: (0.0, 0.0),
            snap_base: (0.0, 0.0),
            snap_spacing: (1.0, 1.0),
            grid_spacing: (1.0, 1.0),
            view_direction: Vector3::UNIT_Z,
            view_target: Vector3::ZERO,
            view_height: 297.0,
            aspect_ratio: 1.0,
            lens_length: 50.0,
            front_clip: 0.0,
            back_clip: 0.0,
            snap_angle: 0.0,
            twist_angle: 0.0,
        }
    }

    /// The *ACTIVE viewport every document carries.
    pub fn active(version: AcadVersion) -> Self {
        Vport::new("*ACTIVE", version)
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_view_height(mut self, height: f64) -> Self {
        self.view_height = height;
        self
    }

    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center = (x, y);
        self
    }
}

impl TableRecord for Vport {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::VPORT,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::VIEWPORT_TABLE_RECORD,
        );
        stream.add(70, 0);
        stream.add_point_2d(10, self.lower_left.0, self.lower_left.1);
        stream.add_point_2d(11, self.upper_right.0, self.upper_right.1);
        stream.add_point_2d(12, self.center.0, self.center.1);
        stream.add_point_2d(13, self.snap_base.0, self.snap_base.1);
        stream.add_point_2d(14, self.snap_spacing.0, self.snap_spacing.1);
        stream.add_point_2d(15, self.grid_spacing.0, self.grid_spacing.1);
        stream.add_point(16, self.view_direction);
        stream.add_point(17, self.view_target);
        stream.add(40, self.view_height);
        stream.add(41, self.aspect_ratio);
        stream.add(42, self.lens_length);
        stream.add(43, self.front_clip);
        stream.add(44, self.back_clip);
        stream.add(50, self.snap_angle);
        stream.add(51, self.twist_angle);
    }
}
