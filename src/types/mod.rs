//! Value types shared by every record builder

pub mod color;
pub mod flags;
pub mod handle;
pub mod line_weight;
pub mod vector;
pub mod version;

pub use color::Color;
pub use flags::{AttributeFlags, BlockTypeFlags, LayerFlags, PolylineFlags, TextGenerationFlags};
pub use handle::{Handle, HandleAllocator};
pub use line_weight::LineWeight;
pub use vector::Vector3;
pub use version::AcadVersion;
