//! Keys of the PokéAPI JSON schema.
//!
//! Parsing code must reach for these constants instead of inlining string
//! literals, so a schema change only ever touches this module.

/// Keys shared by every named resource.
pub mod common {
    pub const NAME: &str = "name";
    pub const URL: &str = "url";
}

/// Keys of the `pokemon` resource.
pub mod pokemon {
    use super::common;

    pub const ID: &str = "id";
    pub const NAME: &str = common::NAME;
    pub const HEIGHT: &str = "height";
    pub const WEIGHT: &str = "weight";
    pub const BASE_EXPERIENCE: &str = "base_experience";

    pub const TYPES: &str = "types";
    pub const TYPE: &str = "type";

    pub const ABILITIES: &str = "abilities";
    pub const ABILITY: &str = "ability";

    pub const SPRITES: &str = "sprites";
    pub const OTHER: &str = "other";
    pub const OFFICIAL_ARTWORK: &str = "official-artwork";
    pub const FRONT_DEFAULT: &str = "front_default";

    /// Path to the official artwork URL, outermost key first.
    pub const ARTWORK_PATH: [&str; 4] = [SPRITES, OTHER, OFFICIAL_ARTWORK, FRONT_DEFAULT];
}
