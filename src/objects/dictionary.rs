//! Dictionary object

use crate::codes::{subclass, type_name};
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle};
use indexmap::IndexMap;

/// A DICTIONARY object: named references to other objects by handle.
///
/// Entries are emitted in insertion order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub version: AcadVersion,
    pub handle: Handle,
    entries: IndexMap<String, Handle>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new(version: AcadVersion) -> Self {
        Dictionary {
            version,
            handle: Handle::NULL,
            entries: IndexMap::new(),
        }
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = handle;
        self
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, target: Handle) {
        self.entries.insert(name.into(), target);
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<Handle> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the dictionary's group-code sequence.
    pub fn emit(&self, stream: &mut GroupCodeStream) {
        stream.add(0, type_name::DICTIONARY);
        if self.version.supports_handles() {
            stream.add(5, self.handle);
            stream.add(100, subclass::DICTIONARY);
        }
        for (name, target) in &self.entries {
            stream.add(3, name.as_str());
            stream.add(350, *target);
        }
    }

    /// Render the dictionary to a standalone string.
    pub fn render(&self) -> String {
        let mut stream = GroupCodeStream::new();
        self.emit(&mut stream);
        stream.build()
    }
}
