//! Bit-flag values written under the integer flag group codes

use bitflags::bitflags;

bitflags! {
    /// Layer state flags (group code 70 on LAYER records)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerFlags: i64 {
        const FROZEN = 1;
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        const LOCKED = 4;
    }
}

bitflags! {
    /// Block type flags (group code 70 on BLOCK records)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BlockTypeFlags: i64 {
        const ANONYMOUS = 1;
        const HAS_ATTRIBUTES = 2;
        const XREF = 4;
        const XREF_OVERLAY = 8;
        const EXTERNAL = 16;
        const RESOLVED = 32;
        const REFERENCED = 64;
    }
}

bitflags! {
    /// Attribute flags (group code 70 on ATTDEF/ATTRIB records)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttributeFlags: i64 {
        const INVISIBLE = 1;
        const CONSTANT = 2;
        const VERIFY = 4;
        const PRESET = 8;
    }
}

bitflags! {
    /// Text mirroring flags (group code 71 on TEXT-family records)
    ///
    /// The empty set is the Default state and is omitted from output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextGenerationFlags: i64 {
        const MIRRORED_X = 2;
        const MIRRORED_Y = 4;
    }
}

bitflags! {
    /// Polyline flags (group code 70 on POLYLINE/LWPOLYLINE records)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i64 {
        const CLOSED = 1;
        const CURVE_FIT = 2;
        const SPLINE_FIT = 4;
        const IS_3D_POLYLINE = 8;
    }
}
