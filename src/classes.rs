//! Class definition record

use crate::codes::type_name;
use crate::stream::GroupCodeStream;

/// A CLASS record: registers an application-defined object type.
#[derive(Debug, Clone)]
pub struct Class {
    pub dxf_name: String,
    pub cpp_name: String,
    pub app_name: String,
    pub proxy_flags: i64,
    pub instance_count: i64,
    pub was_proxy: bool,
    pub is_entity: bool,
}

impl Class {
    pub fn new(
        dxf_name: impl Into<String>,
        cpp_name: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Class {
            dxf_name: dxf_name.into(),
            cpp_name: cpp_name.into(),
            app_name: app_name.into(),
            proxy_flags: 0,
            instance_count: 0,
            was_proxy: false,
            is_entity: false,
        }
    }

    pub fn with_proxy_flags(mut self, flags: i64) -> Self {
        self.proxy_flags = flags;
        self
    }

    pub fn as_entity(mut self) -> Self {
        self.is_entity = true;
        self
    }

    /// Render the class's group-code sequence.
    pub fn emit(&self, stream: &mut GroupCodeStream) {
        stream.add(0, type_name::CLASS);
        stream.add(1, self.dxf_name.as_str());
        stream.add(2, self.cpp_name.as_str());
        stream.add(3, self.app_name.as_str());
        stream.add(90, self.proxy_flags);
        stream.add(91, self.instance_count);
        stream.add(280, if self.was_proxy { 1 } else { 0 });
        stream.add(281, if self.is_entity { 1 } else { 0 });
    }

    /// Render the class to a standalone string.
    pub fn render(&self) -> String {
        let mut stream = GroupCodeStream::new();
        self.emit(&mut stream);
        stream.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_field_order() {
        let class = Class::new("ACDBDICTIONARYWDFLT", "AcDbDictionaryWithDefault", "ObjectDBX Classes");
        let rendered = class.render();
        let codes: Vec<&str> = rendered.lines().step_by(2).collect();
        assert_eq!(codes, ["0", "1", "2", "3", "90", "91", "280", "281"]);
    }

    #[test]
    fn test_entity_flag() {
        let class = Class::new("WIPEOUT", "AcDbWipeout", "WipeOut").as_entity();
        assert!(class.render().ends_with("281\n1\n"));
    }
}
