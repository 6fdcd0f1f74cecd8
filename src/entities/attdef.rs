//! Attribute definition and attribute entities
//!
//! Both share the TEXT field layout; the attribute-specific fields
//! follow under their own subclass marker.

use super::{Entity, EntityCommon, Text};
use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, AttributeFlags, Handle, Vector3};

/// An ATTDEF entity: an attribute template inside a block definition.
#[derive(Debug, Clone)]
pub struct Attdef {
    pub text: Text,
    pub prompt: String,
    pub tag: String,
    pub flags: AttributeFlags,
    /// Field length; 0 is omitted
    pub field_length: i64,
}

impl Attdef {
    pub fn new(tag: impl Into<String>, version: AcadVersion) -> Self {
        Attdef {
            text: Text::new(version),
            prompt: String::new(),
            tag: tag.into(),
            flags: AttributeFlags::default(),
            field_length: 0,
        }
    }

    /// Create a definition with placement and default value.
    pub fn at(
        tag: impl Into<String>,
        insertion: Vector3,
        height: f64,
        default_value: impl Into<String>,
        version: AcadVersion,
    ) -> Self {
        Attdef {
            text: Text::at(insertion, height, default_value, version),
            ..Attdef::new(String::new(), version)
        }
        .with_tag(tag)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_flags(mut self, flags: AttributeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.text.common.handle = handle;
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.text.common.layer = layer.into();
        self
    }
}

impl Entity for Attdef {
    fn common(&self) -> &EntityCommon {
        &self.text.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.text
            .common
            .emit_prelude(stream, type_name::ATTDEF, subclass::TEXT);
        self.text.emit_text_fields(stream);
        if self.text.common.version.supports_handles() {
            stream.add(100, subclass::ATTRIBUTE_DEFINITION);
        }
        stream.add(3, self.prompt.as_str());
        stream.add(2, self.tag.as_str());
        stream.add(70, self.flags.bits());
        if self.field_length != 0 {
            stream.add(73, self.field_length);
        }
        if self.text.vertical_justification != 0 {
            stream.add(74, self.text.vertical_justification);
        }
    }
}

/// An ATTRIB entity: an attribute value attached to an INSERT.
#[derive(Debug, Clone)]
pub struct Attrib {
    pub text: Text,
    pub tag: String,
    pub flags: AttributeFlags,
    /// Field length; 0 is omitted
    pub field_length: i64,
}

impl Attrib {
    pub fn new(tag: impl Into<String>, version: AcadVersion) -> Self {
        Attrib {
            text: Text::new(version),
            tag: tag.into(),
            flags: AttributeFlags::default(),
            field_length: 0,
        }
    }

    /// Create an attribute with placement and value.
    pub fn at(
        tag: impl Into<String>,
        insertion: Vector3,
        height: f64,
        value: impl Into<String>,
        version: AcadVersion,
    ) -> Self {
        Attrib {
            text: Text::at(insertion, height, value, version),
            ..Attrib::new(String::new(), version)
        }
        .with_tag(tag)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_flags(mut self, flags: AttributeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.text.common.handle = handle;
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.text.common.layer = layer.into();
        self
    }
}

impl Entity for Attrib {
    fn common(&self) -> &EntityCommon {
        &self.text.common
    }

    fn emit(&self, stream: &mut GroupCodeStream) {
        self.text
            .common
            .emit_prelude(stream, type_name::ATTRIB, subclass::TEXT);
        self.text.emit_text_fields(stream);
        if self.text.common.version.supports_handles() {
            stream.add(100, subclass::ATTRIBUTE);
        }
        stream.add(2, self.tag.as_str());
        stream.add(70, self.flags.bits());
        if self.field_length != 0 {
            stream.add(73, self.field_length);
        }
        if self.text.vertical_justification != 0 {
            stream.add(74, self.text.vertical_justification);
        }
    }
}
