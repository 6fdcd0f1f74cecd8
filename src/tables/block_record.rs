//! Block record table entry

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle};

/// A BLOCK_RECORD table record.
#[derive(Debug, Clone)]
pub struct BlockRecord {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
}

impl BlockRecord {
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        BlockRecord {
            version,
            handle: Handle::NULL,
            name: name.into(),
        }
    }

    /// The *MODEL_SPACE record every document carries.
    pub fn model_space(version: AcadVersion) -> Self {
        BlockRecord::new("*MODEL_SPACE", version)
    }

    /// The *PAPER_SPACE record every document carries.
    pub fn paper_space(version: AcadVersion) -> Self {
        BlockRecord::new("*PAPER_SPACE", version)
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }
}

impl TableRecord for BlockRecord {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::BLOCK_RECORD,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::BLOCK_TABLE_RECORD,
        );
        stream.add(70, 0);
    }
}
