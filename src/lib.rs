//! # dxfcodec
//!
//! A pure Rust encoder and inspector for ASCII DXF interchange streams.
//!
//! The encoder emits syntactically correct, version-gated DXF text from
//! per-record builders; the inspector re-parses arbitrary DXF-like tag
//! streams into structural boundaries for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxfcodec::document::DxfDocument;
//! use dxfcodec::entities::{Circle, Entity};
//! use dxfcodec::sections::EntitiesSection;
//! use dxfcodec::types::{AcadVersion, HandleAllocator, Vector3};
//!
//! let version = AcadVersion::R2000;
//! let mut alloc = HandleAllocator::default();
//! let mut doc = DxfDocument::standard(version, &mut alloc);
//!
//! let mut entities = EntitiesSection::new();
//! entities.add_entity(
//!     &Circle::from_center_radius(Vector3::ZERO, 5.0, version).with_handle(alloc.next()),
//! );
//! doc.set_entities(entities.finish());
//!
//! let text = doc.build();
//! assert!(text.ends_with("0\nEOF\n"));
//! ```
//!
//! ## Architecture
//!
//! - [`stream::GroupCodeStream`] — the atomic two-lines-per-pair
//!   emission primitive with invariant numeric formatting
//! - [`types::AcadVersion`] — ordinal version gating for handles,
//!   subclass markers, and late fields
//! - [`tables`], [`entities`], [`objects`], [`classes`] — one builder
//!   per record kind, each emitting a fixed group-code order
//! - [`sections`] — the six section assemblers
//! - [`document::DxfDocument`] — canonical section ordering and the EOF
//!   terminator
//! - [`inspect::TagStreamScanner`] — the schema-free diagnostic scanner
//!
//! The encoder is total by design: builders never fail, unset fields
//! render as defaults, and the inspector never rejects malformed input.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod codes;
pub mod document;
pub mod entities;
pub mod error;
pub mod inspect;
pub mod objects;
pub mod sections;
pub mod stream;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use document::DxfDocument;
pub use error::{DxfError, Result};
pub use inspect::{render_listing, ScanItem, TagStreamScanner};
pub use stream::{GroupCodeStream, GroupCodeValue};
pub use types::{AcadVersion, Color, Handle, HandleAllocator, LineWeight, Vector3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
