pub mod keys;
pub mod pokemon;
pub mod sprite;

pub use pokemon::Pokemon;
pub use sprite::Sprite;
