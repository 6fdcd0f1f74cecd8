//! Top-level document assembly
//!
//! A document is six pre-rendered sections concatenated in the one order
//! the format permits, terminated by `(0,"EOF")`. This is the only place
//! section ordering is enforced; callers supply sections in any order
//! through the setters and the build still emits them canonically.

use crate::error::Result;
use crate::sections::{
    BlocksSection, ClassesSection, EntitiesSection, HeaderSection, ObjectsSection, TablesSection,
};
use crate::stream::GroupCodeStream;
use crate::tables::{Appid, BlockRecord, Dimstyle, Layer, Ltype, Style, Vport};
use crate::types::{AcadVersion, HandleAllocator};
use std::fs;
use std::path::Path;

/// A single-version DXF document under construction.
///
/// Each instance is independently owned; parallel builds of different
/// documents share no state.
#[derive(Debug, Clone)]
pub struct DxfDocument {
    pub version: AcadVersion,
    header: String,
    classes: String,
    tables: String,
    blocks: String,
    entities: String,
    objects: String,
}

impl DxfDocument {
    /// Create a document whose sections are all empty-framed.
    pub fn new(version: AcadVersion) -> Self {
        DxfDocument {
            version,
            header: HeaderSection::new(version).finish(),
            classes: ClassesSection::new().finish(),
            tables: TablesSection::new(version).finish(),
            blocks: BlocksSection::new().finish(),
            entities: EntitiesSection::new().finish(),
            objects: ObjectsSection::new().finish(),
        }
    }

    /// Create a document pre-populated with the standard table set:
    /// layer 0, CONTINUOUS, STANDARD styles, the active viewport, the
    /// ACAD app id, and the model/paper space block records.
    pub fn standard(version: AcadVersion, allocator: &mut HandleAllocator) -> Self {
        let mut doc = DxfDocument::new(version);

        let mut tables = TablesSection::new(version);
        tables.add_vport_table(&[Vport::active(version).with_handle(allocator.next())]);
        tables.add_ltype_table(&[Ltype::continuous(version).with_handle(allocator.next())]);
        tables.add_layer_table(&[Layer::layer_0(version).with_handle(allocator.next())]);
        tables.add_style_table(&[Style::standard(version).with_handle(allocator.next())]);
        tables.add_appid_table(&[Appid::acad(version).with_handle(allocator.next())]);
        tables.add_dimstyle_table(&[Dimstyle::standard(version).with_handle(allocator.next())]);
        tables.add_block_record_table(&[
            BlockRecord::model_space(version).with_handle(allocator.next()),
            BlockRecord::paper_space(version).with_handle(allocator.next()),
        ]);
        doc.tables = tables.finish();

        let mut header = HeaderSection::new(version);
        header.standard_variables(allocator.peek());
        doc.header = header.finish();

        doc
    }

    pub fn set_header(&mut self, rendered: String) -> &mut Self {
        self.header = rendered;
        self
    }

    pub fn set_classes(&mut self, rendered: String) -> &mut Self {
        self.classes = rendered;
        self
    }

    pub fn set_tables(&mut self, rendered: String) -> &mut Self {
        self.tables = rendered;
        self
    }

    pub fn set_blocks(&mut self, rendered: String) -> &mut Self {
        self.blocks = rendered;
        self
    }

    pub fn set_entities(&mut self, rendered: String) -> &mut Self {
        self.entities = rendered;
        self
    }

    pub fn set_objects(&mut self, rendered: String) -> &mut Self {
        self.objects = rendered;
        self
    }

    /// Concatenate the sections in the canonical order and terminate
    /// with EOF.
    pub fn build(&self) -> String {
        let mut stream = GroupCodeStream::new();
        stream.append(&self.header);
        stream.append(&self.classes);
        stream.append(&self.tables);
        stream.append(&self.blocks);
        stream.append(&self.entities);
        stream.append(&self.objects);
        stream.add(0, "EOF");
        stream.build()
    }

    /// Write the built document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.build())?;
        Ok(())
    }
}
