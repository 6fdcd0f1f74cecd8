//! Group-code constant tables
//!
//! Record type markers, subclass marker strings, and the code-range
//! classification used by the inspector. All tables are read-only.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Record type markers written after group code 0.
pub mod type_name {
    pub const SECTION: &str = "SECTION";
    pub const ENDSEC: &str = "ENDSEC";
    pub const EOF: &str = "EOF";
    pub const TABLE: &str = "TABLE";
    pub const ENDTAB: &str = "ENDTAB";

    pub const LAYER: &str = "LAYER";
    pub const LTYPE: &str = "LTYPE";
    pub const STYLE: &str = "STYLE";
    pub const VPORT: &str = "VPORT";
    pub const VIEW: &str = "VIEW";
    pub const APPID: &str = "APPID";
    pub const DIMSTYLE: &str = "DIMSTYLE";
    pub const BLOCK_RECORD: &str = "BLOCK_RECORD";
    pub const UCS: &str = "UCS";

    pub const DICTIONARY: &str = "DICTIONARY";
    pub const CLASS: &str = "CLASS";

    pub const BLOCK: &str = "BLOCK";
    pub const ENDBLK: &str = "ENDBLK";

    pub const LINE: &str = "LINE";
    pub const CIRCLE: &str = "CIRCLE";
    pub const ARC: &str = "ARC";
    pub const TEXT: &str = "TEXT";
    pub const ATTDEF: &str = "ATTDEF";
    pub const ATTRIB: &str = "ATTRIB";
    pub const INSERT: &str = "INSERT";
    pub const LWPOLYLINE: &str = "LWPOLYLINE";
    pub const POLYLINE: &str = "POLYLINE";
    pub const VERTEX: &str = "VERTEX";
    pub const SEQEND: &str = "SEQEND";
    pub const POINT: &str = "POINT";
    pub const SOLID: &str = "SOLID";
    pub const TRACE: &str = "TRACE";
    pub const FACE_3D: &str = "3DFACE";
}

/// Subclass marker strings written after group code 100 (R13 onward).
pub mod subclass {
    pub const ENTITY: &str = "AcDbEntity";
    pub const SYMBOL_TABLE: &str = "AcDbSymbolTable";
    pub const SYMBOL_TABLE_RECORD: &str = "AcDbSymbolTableRecord";

    pub const LAYER_TABLE_RECORD: &str = "AcDbLayerTableRecord";
    pub const LINETYPE_TABLE_RECORD: &str = "AcDbLinetypeTableRecord";
    pub const TEXT_STYLE_TABLE_RECORD: &str = "AcDbTextStyleTableRecord";
    pub const VIEWPORT_TABLE_RECORD: &str = "AcDbViewportTableRecord";
    pub const VIEW_TABLE_RECORD: &str = "AcDbViewTableRecord";
    pub const REG_APP_TABLE_RECORD: &str = "AcDbRegAppTableRecord";
    pub const DIM_STYLE_TABLE_RECORD: &str = "AcDbDimStyleTableRecord";
    pub const BLOCK_TABLE_RECORD: &str = "AcDbBlockTableRecord";
    pub const UCS_TABLE_RECORD: &str = "AcDbUCSTableRecord";

    pub const DICTIONARY: &str = "AcDbDictionary";
    pub const BLOCK_BEGIN: &str = "AcDbBlockBegin";
    pub const BLOCK_END: &str = "AcDbBlockEnd";

    pub const LINE: &str = "AcDbLine";
    pub const CIRCLE: &str = "AcDbCircle";
    pub const ARC: &str = "AcDbArc";
    pub const TEXT: &str = "AcDbText";
    pub const ATTRIBUTE_DEFINITION: &str = "AcDbAttributeDefinition";
    pub const ATTRIBUTE: &str = "AcDbAttribute";
    pub const BLOCK_REFERENCE: &str = "AcDbBlockReference";
    pub const POLYLINE: &str = "AcDbPolyline";
    pub const POLYLINE_2D: &str = "AcDb2dPolyline";
    pub const VERTEX: &str = "AcDbVertex";
    pub const VERTEX_2D: &str = "AcDb2dVertex";
    pub const POINT: &str = "AcDbPoint";
    pub const TRACE: &str = "AcDbTrace";
    pub const FACE: &str = "AcDbFace";
}

/// The data type a group code's value line carries, by code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCodeKind {
    Text,
    Integer,
    Real,
    Handle,
}

impl GroupCodeKind {
    /// Lowercase label used in inspector listings.
    pub fn label(self) -> &'static str {
        match self {
            GroupCodeKind::Text => "text",
            GroupCodeKind::Integer => "integer",
            GroupCodeKind::Real => "real",
            GroupCodeKind::Handle => "handle",
        }
    }
}

/// Classify a group code by the standard DXF code ranges.
pub fn code_kind(code: i32) -> GroupCodeKind {
    match code {
        5 => GroupCodeKind::Handle,
        0..=9 => GroupCodeKind::Text,
        10..=59 => GroupCodeKind::Real,
        60..=79 => GroupCodeKind::Integer,
        90..=99 => GroupCodeKind::Integer,
        100 | 102 => GroupCodeKind::Text,
        105 => GroupCodeKind::Handle,
        110..=149 => GroupCodeKind::Real,
        170..=179 => GroupCodeKind::Integer,
        210..=239 => GroupCodeKind::Real,
        270..=299 => GroupCodeKind::Integer,
        300..=309 => GroupCodeKind::Text,
        320..=369 => GroupCodeKind::Handle,
        370..=389 => GroupCodeKind::Integer,
        _ => GroupCodeKind::Text,
    }
}

/// Friendly names for the codes the inspector annotates most often.
pub static CODE_NAMES: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "type"),
        (1, "text"),
        (2, "name"),
        (3, "description"),
        (5, "handle"),
        (6, "linetype"),
        (7, "style"),
        (8, "layer"),
        (9, "variable"),
        (10, "x"),
        (20, "y"),
        (30, "z"),
        (39, "thickness"),
        (40, "real"),
        (50, "angle"),
        (62, "color"),
        (66, "entities-follow"),
        (70, "flags"),
        (90, "count"),
        (100, "subclass"),
        (105, "handle"),
        (210, "extrusion-x"),
        (220, "extrusion-y"),
        (230, "extrusion-z"),
        (370, "lineweight"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_kind_ranges() {
        assert_eq!(code_kind(0), GroupCodeKind::Text);
        assert_eq!(code_kind(2), GroupCodeKind::Text);
        assert_eq!(code_kind(5), GroupCodeKind::Handle);
        assert_eq!(code_kind(10), GroupCodeKind::Real);
        assert_eq!(code_kind(40), GroupCodeKind::Real);
        assert_eq!(code_kind(62), GroupCodeKind::Integer);
        assert_eq!(code_kind(100), GroupCodeKind::Text);
        assert_eq!(code_kind(105), GroupCodeKind::Handle);
        assert_eq!(code_kind(210), GroupCodeKind::Real);
        assert_eq!(code_kind(370), GroupCodeKind::Integer);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(code_kind(1).label(), "text");
        assert_eq!(code_kind(70).label(), "integer");
        assert_eq!(code_kind(41).label(), "real");
        assert_eq!(code_kind(330).label(), "handle");
    }

    #[test]
    fn test_code_names_table() {
        assert_eq!(CODE_NAMES.get(&0), Some(&"type"));
        assert_eq!(CODE_NAMES.get(&105), Some(&"handle"));
        assert!(CODE_NAMES.get(&9999).is_none());
    }
}
