//! Line type table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle};

/// An LTYPE table record.
///
/// The dash pattern is a list of signed element lengths; positive is a
/// dash, negative a gap, zero a dot.
#[derive(Debug, Clone)]
pub struct Ltype {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    pub description: String,
    pub elements: Vec<f64>,
}

impl Ltype {
    /// Create a line type with an empty pattern.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Ltype {
            version,
            handle: Handle::NULL,
            name: name.into(),
            description: String::new(),
            elements: Vec::new(),
        }
    }

    /// The standard CONTINUOUS line type every document carries.
    pub fn continuous(version: AcadVersion) -> Self {
        Ltype::new("CONTINUOUS", version).with_description("Solid line")
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_elements(mut self, elements: Vec<f64>) -> Self {
        self.elements = elements;
        self
    }

    /// Total pattern length: the sum of the element magnitudes.
    pub fn pattern_length(&self) -> f64 {
        self.elements.iter().map(|e| e.abs()).sum()
    }
}

impl TableRecord for Ltype {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::LTYPE,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::LINETYPE_TABLE_RECORD,
        );
        stream.add(70, 0);
        stream.add(3, self.description.as_str());
        // Alignment code is the mandated literal 65 (ASCII 'A'), always.
        stream.add(72, 65);
        stream.add(73, self.elements.len() as i64);
        stream.add(40, self.pattern_length());
        for element in &self.elements {
            stream.add(49, *element);
        }
    }
}
