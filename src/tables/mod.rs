//! Symbol table record builders
//!
//! One builder per table record kind. Every builder emits its group codes
//! in a fixed, format-mandated order: type marker, name, then the
//! version-gated handle and subclass markers, then the record's own
//! fields. Builders are total and never fail; unset fields render as
//! their defaults.

use crate::codes::subclass;
use crate::stream::GroupCodeStream;
use crate::types::{AcadVersion, Handle};

pub mod appid;
pub mod block_record;
pub mod dimstyle;
pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod ucs;
pub mod view;
pub mod vport;

pub use appid::Appid;
pub use block_record::BlockRecord;
pub use dimstyle::Dimstyle;
pub use layer::Layer;
pub use linetype::Ltype;
pub use textstyle::Style;
pub use ucs::Ucs;
pub use view::View;
pub use vport::Vport;

/// A record that can appear between `TABLE` and `ENDTAB`.
pub trait TableRecord {
    /// The record's owning version.
    fn version(&self) -> AcadVersion;

    /// Render the record's group-code sequence.
    fn emit(&self, stream: &mut GroupCodeStream);

    /// Render the record to a standalone string.
    fn render(&self) -> String {
        let mut stream = GroupCodeStream::new();
        self.emit(&mut stream);
        stream.build()
    }
}

/// Emit the common table record prelude: type marker, name, then the
/// version-gated handle and subclass markers.
///
/// `handle_code` is 5 for every record kind except DIMSTYLE, which uses
/// the irregular code 105.
pub(crate) fn emit_record_prelude(
    stream: &mut GroupCodeStream,
    type_name: &'static str,
    name: &str,
    version: AcadVersion,
    handle: Handle,
    handle_code: i32,
    record_subclass: &'static str,
) {
    stream.add(0, type_name);
    stream.add(2, name);
    if version.supports_handles() {
        stream.add(handle_code, handle);
        stream.add(100, subclass::SYMBOL_TABLE_RECORD);
        stream.add(100, record_subclass);
    }
}
