//! Custom widgets

mod text_block;

pub use text_block::TextBlock;
