//! QR code output: external symbol encoding plus terminal rendering.

mod encode;
mod render;

pub use encode::encode;
pub use render::render;
