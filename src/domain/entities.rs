use time::OffsetDateTime;

/// Identifier for parts in the session catalog.
pub type PartId = u32;

/// One orderable item. Attribute fields are loose string keys on purpose:
/// pricing falls back to neutral multipliers for anything unrecognised, so
/// a garbage key degrades the quote instead of breaking it.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    /// Human-readable one-liner shown under the part name in the catalog.
    /// Rewritten whenever material or tolerance change.
    pub descriptive_config: String,
    pub display_glyph: &'static str,
    pub material: String,
    pub tolerance: String,
    pub surface: String,
    pub quantity: u32,
    /// Reference price carried over from the catalog. Display metadata only;
    /// live quotes always recompute from the fixed base (see domain::pricing).
    pub unit_base_price: f64,
}

/// Partial set of attribute assignments extracted from free text.
/// Fields left `None` never touch the part they are applied to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub material: Option<&'static str>,
    pub tolerance: Option<&'static str>,
    pub surface: Option<&'static str>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.material.is_none() && self.tolerance.is_none() && self.surface.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// Canned reply categories the question classifier can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseTopic {
    Material,
    SurfaceFinish,
    Tolerance,
    Process,
    Cost,
    Capabilities,
}

/// Payload of a transcript entry. Assistant replies stay structured so the
/// UI renders real markup instead of assembling HTML strings.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatBody {
    Text(String),
    /// Placeholder shown while a simulated reply is "thinking".
    Thinking,
    Topic(ResponseTopic),
    PresetApplied {
        material: &'static str,
        tolerance: &'static str,
        surface: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub id: String,
    pub role: ChatRole,
    pub body: ChatBody,
    pub timestamp: OffsetDateTime,
}

/// Transient marker committing the next submitted utterance to a handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentTag {
    Ask,
    Configure,
}

impl IntentTag {
    pub fn label(&self) -> &'static str {
        match self {
            IntentTag::Ask => "Ask the assistant",
            IntentTag::Configure => "Configure for",
        }
    }
}

/// Marker glyph used for bullet lists in assistant replies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulletStyle {
    #[default]
    Default,
    Dash,
    Arrow,
    Check,
    Star,
    Diamond,
    Circle,
    Numbered,
}

impl BulletStyle {
    pub const ALL: &'static [BulletStyle] = &[
        BulletStyle::Default,
        BulletStyle::Dash,
        BulletStyle::Arrow,
        BulletStyle::Check,
        BulletStyle::Star,
        BulletStyle::Diamond,
        BulletStyle::Circle,
        BulletStyle::Numbered,
    ];

    /// Marker for the nth list entry (only `Numbered` cares about `index`).
    pub fn marker(&self, index: usize) -> String {
        match self {
            BulletStyle::Default => "•".to_string(),
            BulletStyle::Dash => "—".to_string(),
            BulletStyle::Arrow => "→".to_string(),
            BulletStyle::Check => "✓".to_string(),
            BulletStyle::Star => "★".to_string(),
            BulletStyle::Diamond => "◆".to_string(),
            BulletStyle::Circle => "●".to_string(),
            BulletStyle::Numbered => format!("{}.", index + 1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BulletStyle::Default => "Default Bullets",
            BulletStyle::Dash => "Dashes",
            BulletStyle::Arrow => "Arrows",
            BulletStyle::Check => "Checkmarks",
            BulletStyle::Star => "Stars",
            BulletStyle::Diamond => "Diamonds",
            BulletStyle::Circle => "Circles",
            BulletStyle::Numbered => "Numbers",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulletTheme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Gray,
}

impl BulletTheme {
    pub const ALL: &'static [BulletTheme] = &[
        BulletTheme::Blue,
        BulletTheme::Green,
        BulletTheme::Purple,
        BulletTheme::Orange,
        BulletTheme::Red,
        BulletTheme::Gray,
    ];

    pub fn marker_class(&self) -> &'static str {
        match self {
            BulletTheme::Blue => "text-sky-400",
            BulletTheme::Green => "text-emerald-400",
            BulletTheme::Purple => "text-purple-400",
            BulletTheme::Orange => "text-orange-400",
            BulletTheme::Red => "text-rose-400",
            BulletTheme::Gray => "text-slate-400",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BulletTheme::Blue => "Blue",
            BulletTheme::Green => "Green",
            BulletTheme::Purple => "Purple",
            BulletTheme::Orange => "Orange",
            BulletTheme::Red => "Red",
            BulletTheme::Gray => "Gray",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulletSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BulletSize {
    pub const ALL: &'static [BulletSize] = &[BulletSize::Small, BulletSize::Medium, BulletSize::Large];

    pub fn text_class(&self) -> &'static str {
        match self {
            BulletSize::Small => "text-xs",
            BulletSize::Medium => "text-sm",
            BulletSize::Large => "text-base",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BulletSize::Small => "Small",
            BulletSize::Medium => "Medium",
            BulletSize::Large => "Large",
        }
    }
}

/// Presentation preferences for assistant bullet lists. Session-scoped,
/// like everything else in the app state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulletPrefs {
    pub style: BulletStyle,
    pub theme: BulletTheme,
    pub size: BulletSize,
}

pub fn material_label(key: &str) -> &str {
    match key {
        "aluminum" | "aluminum-6061" => "Aluminum 6061-T6",
        "aluminum-7075" => "Aluminum 7075-T6",
        "steel-304" => "Stainless Steel 304",
        "steel" | "steel-316" => "Stainless Steel 316",
        "titanium" | "titanium-grade5" => "Titanium Grade 5",
        "plastic" | "plastic-abs" => "ABS Plastic",
        "nylon" | "nylon-66" => "Nylon 6/6",
        other => other,
    }
}

pub fn tolerance_label(key: &str) -> &str {
    match key {
        "loose" => "Loose (±0.2mm)",
        "standard" => "Standard (±0.1mm)",
        "precision" => "Precision (±0.05mm)",
        "ultra" => "Ultra Precision (±0.02mm)",
        "critical" => "Critical (±0.005mm)",
        other => other,
    }
}

pub fn surface_label(key: &str) -> &str {
    match key {
        "as-machined" => "As Machined",
        "bead-blasted" => "Bead Blasted",
        "polished" | "polished-standard" => "Polished",
        "anodized" | "anodized-clear" => "Anodized",
        "chrome-plated" => "Chrome Plated",
        "powder-coat" => "Powder Coat",
        "mirror-polish" => "Mirror Polish",
        other => other,
    }
}

/// Swatch color for the stub 3D preview, keyed on the material family.
pub fn material_color(key: &str) -> &'static str {
    let family = key.split('-').next().unwrap_or(key);
    match family {
        "aluminum" => "#C0C0C0",
        "steel" => "#8B8B8B",
        "titanium" => "#708090",
        "plastic" => "#87CEEB",
        "nylon" => "#4682B4",
        _ => "#808080",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_pass_unknown_keys_through() {
        assert_eq!(material_label("unobtainium"), "unobtainium");
        assert_eq!(tolerance_label("sloppy"), "sloppy");
        assert_eq!(surface_label("glitter"), "glitter");
    }

    #[test]
    fn material_color_falls_back_to_gray() {
        assert_eq!(material_color("aluminum-6061"), "#C0C0C0");
        assert_eq!(material_color("steel-316"), "#8B8B8B");
        assert_eq!(material_color("unobtainium"), "#808080");
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(ConfigPatch::default().is_empty());
        let patch = ConfigPatch {
            tolerance: Some("ultra"),
            ..ConfigPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
