//! Application ID table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle};

/// An APPID table record.
#[derive(Debug, Clone)]
pub struct Appid {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
}

impl Appid {
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Appid {
            version,
            handle: Handle::NULL,
            name: name.into(),
        }
    }

    /// The ACAD registration every document carries.
    pub fn acad(version: AcadVersion) -> Self {
        Appid::new("ACAD", version)
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }
}

impl TableRecord for Appid {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::APPID,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::REG_APP_TABLE_RECORD,
        );
        stream.add(70, 0);
    }
}
