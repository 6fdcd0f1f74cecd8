//! Layer table record

use super::{emit_record_prelude, TableRecord};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Color, Handle, LayerFlags, LineWeight};

/// A LAYER table record.
#[derive(Debug, Clone)]
pub struct Layer {
    pub version: AcadVersion,
    pub handle: Handle,
    pub name: String,
    pub flags: LayerFlags,
    pub color: Color,
    pub line_type: String,
    pub line_weight: LineWeight,
}

impl Layer {
    /// Create a layer with the format-mandated defaults.
    pub fn new(name: impl Into<String>, version: AcadVersion) -> Self {
        Layer {
            version,
            handle: Handle::NULL,
            name: name.into(),
            flags: LayerFlags::default(),
            color: Color::WHITE,
            line_type: "CONTINUOUS".to_string(),
            line_weight: LineWeight::Default,
        }
    }

    /// The standard layer "0" every document carries.
    pub fn layer_0(version: AcadVersion) -> Self {
        Layer::new("0", version)
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_line_type(mut self, line_type: impl Into<String>) -> Self {
        self.line_type = line_type.into();
        self
    }

    pub fn with_line_weight(mut self, line_weight: LineWeight) -> Self {
        self.line_weight = line_weight;
        self
    }

    pub fn with_flags(mut self, flags: LayerFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl TableRecord for Layer {
    fn version(&self) -> AcadVersion {
        self.version
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        emit_record_prelude(
            stream,
            type_name::LAYER,
            &self.name,
            self.version,
            self.handle,
            5,
            subclass::LAYER_TABLE_RECORD,
        );
        stream.add(70, self.flags.bits());
        stream.add(62, self.color.aci());
        stream.add(6, self.line_type.as_str());
        if self.version.supports_extended_symbol_data() && !self.line_weight.is_default() {
            stream.add(370, self.line_weight.value());
        }
    }
}
