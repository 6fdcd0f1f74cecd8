//! Section assemblers
//!
//! Each assembler opens with `(0,"SECTION")(2,<name>)` on construction,
//! accepts pre-rendered records, and closes with `(0,"ENDSEC")` in
//! `finish()`. The TABLES assembler additionally frames each table with
//! `TABLE`/`ENDTAB` and derives the declared count from the record
//! sequence itself, so count and content cannot drift apart.

use crate::classes::Class;
use crate::codes::{subclass, type_name};
use crate::entities::{Block, Entity};
use crate::objects::Dictionary;
use crate::stream::GroupCodeStream;
use crate::tables::{
    Appid, BlockRecord, Dimstyle, Layer, Ltype, Style, TableRecord, Ucs, View, Vport,
};
use crate::types::{AcadVersion, Handle, Vector3};

/// Well-known table handles, consistent across files for
/// interoperability.
const HANDLE_VPORT_TABLE: u64 = 0x8;
const HANDLE_LTYPE_TABLE: u64 = 0x5;
const HANDLE_LAYER_TABLE: u64 = 0x2;
const HANDLE_STYLE_TABLE: u64 = 0x3;
const HANDLE_VIEW_TABLE: u64 = 0x6;
const HANDLE_UCS_TABLE: u64 = 0x7;
const HANDLE_APPID_TABLE: u64 = 0x9;
const HANDLE_DIMSTYLE_TABLE: u64 = 0xA;
const HANDLE_BLOCK_RECORD_TABLE: u64 = 0x1;

fn open_section(name: &str) -> GroupCodeStream {
    let mut stream = GroupCodeStream::new();
    stream.add(0, type_name::SECTION).add(2, name);
    stream
}

fn close_section(mut stream: GroupCodeStream) -> String {
    stream.add(0, type_name::ENDSEC);
    stream.build()
}

/// Assembles the HEADER section from named variables.
pub struct HeaderSection {
    version: AcadVersion,
    stream: GroupCodeStream,
}

impl HeaderSection {
    pub fn new(version: AcadVersion) -> Self {
        let mut stream = open_section("HEADER");
        stream.add(9, "$ACADVER").add(1, version.dxf_string());
        HeaderSection { version, stream }
    }

    /// Emit one header variable: its name under code 9, then whatever
    /// pairs `write_value` appends.
    pub fn variable<F>(&mut self, name: &str, write_value: F) -> &mut Self
    where
        F: FnOnce(&mut GroupCodeStream),
    {
        self.stream.add(9, name);
        write_value(&mut self.stream);
        self
    }

    /// Emit the essential variable set: handle seed (when handles
    /// exist), extents, limits, current layer, and units.
    pub fn standard_variables(&mut self, handle_seed: Handle) -> &mut Self {
        if self.version.supports_handles() {
            self.variable("$HANDSEED", |s| {
                s.add(5, handle_seed);
            });
        }
        self.variable("$EXTMIN", |s| {
            s.add_point(10, Vector3::ZERO);
        });
        self.variable("$EXTMAX", |s| {
            s.add_point(10, Vector3::ZERO);
        });
        self.variable("$LIMMIN", |s| {
            s.add_point_2d(10, 0.0, 0.0);
        });
        self.variable("$LIMMAX", |s| {
            s.add_point_2d(10, 420.0, 297.0);
        });
        self.variable("$CLAYER", |s| {
            s.add(8, "0");
        });
        self.variable("$INSUNITS", |s| {
            s.add(70, 4);
        });
        self
    }

    pub fn finish(self) -> String {
        close_section(self.stream)
    }
}

/// Assembles the CLASSES section.
pub struct ClassesSection {
    stream: GroupCodeStream,
}

impl ClassesSection {
    pub fn new() -> Self {
        ClassesSection {
            stream: open_section("CLASSES"),
        }
    }

    pub fn add_class(&mut self, class: &Class) -> &mut Self {
        class.emit(&mut self.stream);
        self
    }

    pub fn finish(self) -> String {
        close_section(self.stream)
    }
}

impl Default for ClassesSection {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles the TABLES section, one table kind at a time.
pub struct TablesSection {
    version: AcadVersion,
    stream: GroupCodeStream,
}

impl TablesSection {
    pub fn new(version: AcadVersion) -> Self {
        TablesSection {
            version,
            stream: open_section("TABLES"),
        }
    }

    fn add_table<R: TableRecord>(&mut self, name: &'static str, table_handle: u64, records: &[R]) {
        self.stream.add(0, type_name::TABLE).add(2, name);
        if self.version.supports_handles() {
            self.stream.add(5, Handle::new(table_handle));
            self.stream.add(100, subclass::SYMBOL_TABLE);
        }
        self.stream.add(70, records.len() as i64);
        for record in records {
            record.emit(&mut self.stream);
        }
        self.stream.add(0, type_name::ENDTAB);
    }

    pub fn add_vport_table(&mut self, records: &[Vport]) -> &mut Self {
        self.add_table(type_name::VPORT, HANDLE_VPORT_TABLE, records);
        self
    }

    pub fn add_ltype_table(&mut self, records: &[Ltype]) -> &mut Self {
        self.add_table(type_name::LTYPE, HANDLE_LTYPE_TABLE, records);
        self
    }

    pub fn add_layer_table(&mut self, records: &[Layer]) -> &mut Self {
        self.add_table(type_name::LAYER, HANDLE_LAYER_TABLE, records);
        self
    }

    pub fn add_style_table(&mut self, records: &[Style]) -> &mut Self {
        self.add_table(type_name::STYLE, HANDLE_STYLE_TABLE, records);
        self
    }

    pub fn add_view_table(&mut self, records: &[View]) -> &mut Self {
        self.add_table(type_name::VIEW, HANDLE_VIEW_TABLE, records);
        self
    }

    pub fn add_ucs_table(&mut self, records: &[Ucs]) -> &mut Self {
        self.add_table(type_name::UCS, HANDLE_UCS_TABLE, records);
        self
    }

    pub fn add_appid_table(&mut self, records: &[Appid]) -> &mut Self {
        self.add_table(type_name::APPID, HANDLE_APPID_TABLE, records);
        self
    }

    pub fn add_dimstyle_table(&mut self, records: &[Dimstyle]) -> &mut Self {
        self.add_table(type_name::DIMSTYLE, HANDLE_DIMSTYLE_TABLE, records);
        self
    }

    pub fn add_block_record_table(&mut self, records: &[BlockRecord]) -> &mut Self {
        self.add_table(type_name::BLOCK_RECORD, HANDLE_BLOCK_RECORD_TABLE, records);
        self
    }

    pub fn finish(self) -> String {
        close_section(self.stream)
    }
}

/// Assembles the BLOCKS section.
pub struct BlocksSection {
    stream: GroupCodeStream,
}

impl BlocksSection {
    pub fn new() -> Self {
        BlocksSection {
            stream: open_section("BLOCKS"),
        }
    }

    pub fn add_block(&mut self, block: &Block) -> &mut Self {
        block.emit(&mut self.stream);
        self
    }

    pub fn finish(self) -> String {
        close_section(self.stream)
    }
}

impl Default for BlocksSection {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles the ENTITIES section.
pub struct EntitiesSection {
    stream: GroupCodeStream,
}

impl EntitiesSection {
    pub fn new() -> Self {
        EntitiesSection {
            stream: open_section("ENTITIES"),
        }
    }

    pub fn add_entity(&mut self, entity: &impl Entity) -> &mut Self {
        entity.emit(&mut self.stream);
        self
    }

    /// Splice an already rendered record without re-validating it.
    pub fn add_rendered(&mut self, rendered: &str) -> &mut Self {
        self.stream.append(rendered);
        self
    }

    pub fn finish(self) -> String {
        close_section(self.stream)
    }
}

impl Default for EntitiesSection {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles the OBJECTS section.
pub struct ObjectsSection {
    stream: GroupCodeStream,
}

impl ObjectsSection {
    pub fn new() -> Self {
        ObjectsSection {
            stream: open_section("OBJECTS"),
        }
    }

    pub fn add_dictionary(&mut self, dictionary: &Dictionary) -> &mut Self {
        dictionary.emit(&mut self.stream);
        self
    }

    pub fn finish(self) -> String {
        close_section(self.stream)
    }
}

impl Default for ObjectsSection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_framing() {
        let section = EntitiesSection::new().finish();
        assert_eq!(section, "0\nSECTION\n2\nENTITIES\n0\nENDSEC\n");
    }

    #[test]
    fn test_header_starts_with_acadver() {
        let header = HeaderSection::new(AcadVersion::R10).finish();
        assert!(header.starts_with("0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1006\n"));
    }

    #[test]
    fn test_handseed_only_with_handles() {
        let mut r10 = HeaderSection::new(AcadVersion::R10);
        r10.standard_variables(Handle::new(0x100));
        assert!(!r10.finish().contains("$HANDSEED"));

        let mut r2000 = HeaderSection::new(AcadVersion::R2000);
        r2000.standard_variables(Handle::new(0x100));
        let text = r2000.finish();
        assert!(text.contains("9\n$HANDSEED\n5\n100\n"));
    }

    #[test]
    fn test_table_count_matches_records() {
        let layers = vec![
            Layer::layer_0(AcadVersion::R10),
            Layer::new("WIRES", AcadVersion::R10),
            Layer::new("GATES", AcadVersion::R10),
        ];
        let mut tables = TablesSection::new(AcadVersion::R10);
        tables.add_layer_table(&layers);
        let text = tables.finish();
        assert!(text.contains("0\nTABLE\n2\nLAYER\n70\n3\n"));
        assert_eq!(text.matches("0\nLAYER\n").count(), 3);
    }

    #[test]
    fn test_table_gets_handle_and_subclass_from_r13() {
        let mut tables = TablesSection::new(AcadVersion::R2000);
        tables.add_layer_table(&[Layer::layer_0(AcadVersion::R2000)]);
        let text = tables.finish();
        assert!(text.contains("0\nTABLE\n2\nLAYER\n5\n2\n100\nAcDbSymbolTable\n70\n1\n"));
    }

    #[test]
    fn test_empty_table_has_zero_count() {
        let mut tables = TablesSection::new(AcadVersion::R10);
        tables.add_ucs_table(&[]);
        let text = tables.finish();
        assert!(text.contains("0\nTABLE\n2\nUCS\n70\n0\n0\nENDTAB\n"));
    }
}
