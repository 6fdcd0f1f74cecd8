//! Polyline entities
//!
//! Two generations of the format coexist: the old-style POLYLINE with
//! separate VERTEX records and a SEQEND terminator, and the compact
//! LWPOLYLINE that inlines its vertices.

use super::{emit_extrusion, Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle, PolylineFlags, Vector3};

/// One vertex of an LWPOLYLINE.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LwVertex {
    pub x: f64,
    pub y: f64,
    /// Arc bulge; 0.0 is omitted
    pub bulge: f64,
}

impl LwVertex {
    pub fn new(x: f64, y: f64) -> Self {
        LwVertex { x, y, bulge: 0.0 }
    }

    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }
}

/// An LWPOLYLINE entity.
#[derive(Debug, Clone)]
pub struct Lwpolyline {
    pub common: EntityCommon,
    pub flags: PolylineFlags,
    /// Constant width; 0.0 is omitted
    pub constant_width: f64,
    pub vertices: Vec<LwVertex>,
    pub extrusion: Option<Vector3>,
}

impl Lwpolyline {
    pub fn new(version: AcadVersion) -> Self {
        Lwpolyline {
            common: EntityCommon::new(version),
            flags: PolylineFlags::default(),
            constant_width: 0.0,
            vertices: Vec::new(),
            extrusion: None,
        }
    }

    /// Create a polyline through 2D points.
    pub fn from_points(points: &[(f64, f64)], version: AcadVersion) -> Self {
        Lwpolyline {
            vertices: points.iter().map(|&(x, y)| LwVertex::new(x, y)).collect(),
            ..Lwpolyline::new(version)
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

    pub fn closed(mut self) -> Self {
        self.flags |= PolylineFlags::CLOSED;
        self
    }

    pub fn push(&mut self, vertex: LwVertex) {
        self.vertices.push(vertex);
    }
}

impl Entity for Lwpolyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::LWPOLYLINE, subclass::POLYLINE);
        stream.add(90, self.vertices.len() as i64);
        stream.add(70, self.flags.bits());
        if self.constant_width != 0.0 {
            stream.add(43, self.constant_width);
        }
        for vertex in &self.vertices {
            stream.add_point_2d(10, vertex.x, vertex.y);
            if vertex.bulge != 0.0 {
                stream.add(42, vertex.bulge);
            }
        }
        emit_extrusion(stream, self.extrusion);
    }
}

/// A VERTEX record belonging to an old-style POLYLINE.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub common: EntityCommon,
    pub location: Vector3,
    /// Arc bulge; 0.0 is omitted
    pub bulge: f64,
    pub flags: i64,
}

impl Vertex {
    pub fn new(location: Vector3, version: AcadVersion) -> Self {
        Vertex {
            common: EntityCommon::new(version),
            location,
            bulge: 0.0,
            flags: 0,
        }
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.common.handle = handle;
        self
    }

    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }
}

impl Entity for Vertex {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::VERTEX, subclass::VERTEX);
        if self.common.version.supports_handles() {
            stream.add(100, subclass::VERTEX_2D);
        }
        stream.add_point(10, self.location);
        if self.bulge != 0.0 {
            stream.add(42, self.bulge);
        }
        stream.add(70, self.flags);
    }
}

/// A SEQEND record terminating a vertex sequence.
#[derive(Debug, Clone)]
pub struct Seqend {
    pub common: EntityCommon,
}

impl Seqend {
    pub fn new(version: AcadVersion) -> Self {
        Seqend {
            common: EntityCommon::new(version),
        }
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.common.handle = handle;
        self
    }
}

impl Entity for Seqend {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        stream.add(0, type_name::SEQEND);
        stream.add(8, self.common.layer.as_str());
        if self.common.version.supports_handles() {
            stream.add(5, self.common.handle);
            stream.add(100, subclass::ENTITY);
        }
    }
}

/// An old-style POLYLINE entity with its vertex records and terminator.
#[derive(Debug, Clone)]
pub struct Polyline {
    pub common: EntityCommon,
    pub flags: PolylineFlags,
    pub elevation: f64,
    pub vertices: Vec<Vertex>,
    pub seqend: Seqend,
}

impl Polyline {
    pub fn new(version: AcadVersion) -> Self {
        Polyline {
            common: EntityCommon::new(version),
            flags: PolylineFlags::default(),
            elevation: 0.0,
            vertices: Vec::new(),
            seqend: Seqend::new(version),
        }
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        let layer = layer.into();
        self.seqend.common.layer = layer.clone();
        self.common.layer = layer;
        self
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.common.handle = handle;
        self
    }

    pub fn closed(mut self) -> Self {
        self.flags |= PolylineFlags::CLOSED;
        self
    }

    /// Append a vertex, keeping it on the polyline's layer.
    pub fn push(&mut self, mut vertex: Vertex) {
        vertex.common.layer = self.common.layer.clone();
        self.vertices.push(vertex);
    }
}

impl Entity for Polyline {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::POLYLINE, subclass::POLYLINE_2D);
        // Vertex records always follow.
        stream.add(66, 1);
        stream.add_point(10, Vector3::new(0.0, 0.0, self.elevation));
        stream.add(70, self.flags.bits());
        for vertex in &self.vertices {
            vertex.emit(stream);
        }
        self.seqend.emit(stream);
    }
}
