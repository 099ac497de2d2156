//! UI Components for BlockBeauty.

mod code_card;
mod code_editor;
mod export_button;
pub mod pickers;
mod resize_handle;
mod toolbar;

pub use code_card::CodeCard;
pub use code_editor::CodeEditor;
pub use export_button::ExportButton;
pub use resize_handle::{DragCapture, ResizeHandle};
pub use toolbar::Toolbar;
