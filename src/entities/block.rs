//! Block definition record pair
//!
//! A block definition is a BLOCK begin record, the pre-rendered entities
//! it contains, and an ENDBLK end record. Begin and end each own an
//! independent handle; they are never equal.

use super::{Entity, EntityCommon};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, BlockTypeFlags, Handle, Vector3};

/// A BLOCK definition.
#[derive(Debug, Clone)]
pub struct Block {
    pub common: EntityCommon,
    /// Handle of the closing ENDBLK record
    pub end_handle: Handle,
    pub name: String,
    pub flags: BlockTypeFlags,
    pub base_point: Vector3,
    pub xref_path: String,
    /// Description string; exists only from R2000 onward
    pub description: String,
    entities: Vec<String>,
}

impl Block {
    /// Create an empty block definition.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Block {
            common: EntityCommon::new(version),
            end_handle: Handle::NULL,
            name: name.into(),
            flags: BlockTypeFlags::default(),
            base_point: Vector3::ZERO,
            xref_path: String::new(),
            description: String::new(),
            entities: Vec::new(),
        }
    }

    /// Assign the begin and end handles; they must differ.
    pub fn with_handles(mut self, begin: Handle, end: Handle) -> Self {
        self.common.handle = begin;
        self.end_handle = end;
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.common.layer = layer.into();
        self
    }

    pub fn with_base_point(mut self, base_point: Vector3) -> Self {
        self.base_point = base_point;
        self
    }

    pub fn with_flags(mut self, flags: BlockTypeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a contained entity's pre-rendered text.
    pub fn push_rendered(&mut self, rendered: String) {
        self.entities.push(rendered);
    }

    /// Append a contained entity.
    pub fn push_entity(&mut self, entity: &impl Entity) {
        self.entities.push(entity.render());
    }

    /// Render the begin record, the contained entities, and the end
    /// record.
    pub fn emit(&self, stream: &mut GroupCodeStream) {
        self.common
            .emit_prelude(stream, type_name::BLOCK, subclass::BLOCK_BEGIN);
        stream.add(2, self.name.as_str());
        stream.add(70, self.flags.bits());
        stream.add_point(10, self.base_point);
        stream.add(3, self.name.as_str());
        stream.add(1, self.xref_path.as_str());
        if self.common.version.supports_extended_symbol_data() && !self.description.is_empty() {
            stream.add(4, self.description.as_str());
        }
        for entity in &self.entities {
            stream.append(entity);
        }
        stream.add(0, type_name::ENDBLK);
        stream.add(8, self.common.layer.as_str());
        if self.common.version.supports_handles() {
            stream.add(5, self.end_handle);
            stream.add(100, subclass::ENTITY);
            stream.add(100, subclass::BLOCK_END);
        }
    }

    /// Render the block to a standalone string.
    pub fn render(&self) -> String {
        let mut stream = GroupCodeStream::new();
        self.emit(&mut stream);
        stream.build()
    }
}
