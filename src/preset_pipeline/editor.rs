//! Transfer function editor module
//!
//! This module turns control points edited in the embedded browser widget
//! back into the host's colour and opacity curves.

mod bridge;
mod histogram;
mod merge;
mod parse;
pub mod types;


pub use bridge::{EditorBridge, TransferFunctionEditor};
pub use histogram::Histogram;
pub use merge::apply_edited_transfer_function;
pub use parse::parse_edited_points;
pub use types::{BUNDLED_EDITOR_PAGE, EditedColor, EditedPoint, EditorSource, StagedTransferFunction};
