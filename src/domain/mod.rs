//! Domain logic for part configuration and the scripted assistant.

pub mod app_state;
pub mod assistant;
pub mod catalog;
pub mod entities;
pub mod pricing;

pub use app_state::AppState;
pub use assistant::{
    classify_question, extract_config_patch, material_preset, parse_slash_command, SlashCommand,
    PRESET_CODES,
};
pub use entities::{
    material_color, material_label, surface_label, tolerance_label, BulletPrefs, BulletSize,
    BulletStyle, BulletTheme, ChatBody, ChatEntry, ChatRole, ConfigPatch, IntentTag, Part, PartId,
    ResponseTopic,
};
pub use pricing::{price_part, CostBreakdown};
