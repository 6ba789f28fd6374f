//! Rule-based intent routing for the scripted assistant.
//!
//! Everything here is an ordered first-match-wins scan over fixed keyword
//! lists. The precedence is part of the product behaviour (including its
//! quirks, see `extract_config_patch`) and must not be reordered.

use super::entities::{ConfigPatch, ResponseTopic};

/// Result of interpreting text typed after the `/` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlashCommand {
    Ask,
    Configure,
    Help,
    Unknown,
}

pub fn parse_slash_command(input: &str) -> SlashCommand {
    match input.trim().to_lowercase().as_str() {
        "/ask" => SlashCommand::Ask,
        "/configure" => SlashCommand::Configure,
        "/help" => SlashCommand::Help,
        _ => SlashCommand::Unknown,
    }
}

/// Keyword groups tested in priority order; the first group with a hit
/// decides the reply template. No hit falls through to the generic
/// capabilities card, never to an error.
const TOPIC_RULES: &[(&[&str], ResponseTopic)] = &[
    (&["material"], ResponseTopic::Material),
    (&["finish", "surface"], ResponseTopic::SurfaceFinish),
    (&["tolerance", "precision"], ResponseTopic::Tolerance),
    (
        &["manufacturing", "process", "how to make"],
        ResponseTopic::Process,
    ),
    (&["cost", "price", "expensive"], ResponseTopic::Cost),
];

pub fn classify_question(question: &str) -> ResponseTopic {
    let lowered = question.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, topic)| *topic)
        .unwrap_or(ResponseTopic::Capabilities)
}

/// Extracts at most one value per attribute class using fixed substring
/// rules evaluated in order.
///
/// The material branch order is inherited behaviour: "aluminum" matches
/// the 6061 rule before the 7075 rule is ever reached, so plain
/// "aluminum" (and even "aluminum 7075") always resolves to 6061, and
/// "steel 316" resolves to 304. Reproducible, covered by tests, and kept
/// as-is on purpose.
pub fn extract_config_patch(query: &str) -> ConfigPatch {
    let lowered = query.to_lowercase();

    let material = if lowered.contains("6061") || lowered.contains("aluminum") {
        Some("aluminum-6061")
    } else if lowered.contains("7075") {
        Some("aluminum-7075")
    } else if lowered.contains("304") || lowered.contains("steel") {
        Some("steel-304")
    } else if lowered.contains("316") {
        Some("steel-316")
    } else if lowered.contains("titanium") {
        Some("titanium-grade5")
    } else if lowered.contains("abs") || lowered.contains("plastic") {
        Some("plastic-abs")
    } else {
        None
    };

    let tolerance = if lowered.contains("standard") {
        Some("standard")
    } else if lowered.contains("precision") {
        Some("precision")
    } else if lowered.contains("ultra") {
        Some("ultra")
    } else {
        None
    };

    let surface = if lowered.contains("anodized") {
        Some("anodized-clear")
    } else if lowered.contains("polished") {
        Some("polished-standard")
    } else if lowered.contains("bead blasted") {
        Some("bead-blasted")
    } else {
        None
    };

    ConfigPatch {
        material,
        tolerance,
        surface,
    }
}

/// Canned `(material, tolerance, surface)` triple for the preset buttons
/// in the material guide. Unknown codes fall back to the 6061 preset.
pub fn material_preset(code: &str) -> (&'static str, &'static str, &'static str) {
    match code {
        "7075" => ("aluminum-7075", "standard", "anodized-clear"),
        "304" => ("steel-304", "standard", "bead-blasted"),
        "316" => ("steel-316", "standard", "polished-standard"),
        "titanium" => ("titanium-grade5", "standard", "polished-standard"),
        _ => ("aluminum-6061", "standard", "anodized-clear"),
    }
}

/// Codes exposed as preset buttons, in display order.
pub const PRESET_CODES: &[(&str, &str)] = &[
    ("6061", "Configure 6061"),
    ("7075", "Configure 7075"),
    ("304", "Configure 304 Steel"),
    ("316", "Configure 316 Steel"),
    ("titanium", "Configure Titanium"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slash_commands_are_case_insensitive() {
        assert_eq!(parse_slash_command("/ask"), SlashCommand::Ask);
        assert_eq!(parse_slash_command("/Configure"), SlashCommand::Configure);
        assert_eq!(parse_slash_command("/HELP"), SlashCommand::Help);
        assert_eq!(parse_slash_command("/refund"), SlashCommand::Unknown);
    }

    #[test]
    fn finish_keyword_wins_before_later_groups() {
        assert_eq!(
            classify_question("what finish should I use"),
            ResponseTopic::SurfaceFinish
        );
    }

    #[test]
    fn material_group_outranks_everything() {
        // "material" and "cost" both appear; material is tested first.
        assert_eq!(
            classify_question("what material keeps the cost down?"),
            ResponseTopic::Material
        );
    }

    #[test]
    fn classification_matches_each_group() {
        assert_eq!(classify_question("surface options?"), ResponseTopic::SurfaceFinish);
        assert_eq!(classify_question("precision levels"), ResponseTopic::Tolerance);
        assert_eq!(classify_question("how to make this?"), ResponseTopic::Process);
        assert_eq!(classify_question("is titanium expensive"), ResponseTopic::Cost);
    }

    #[test]
    fn unmatched_question_degrades_to_capabilities() {
        assert_eq!(classify_question("hello there"), ResponseTopic::Capabilities);
        assert_eq!(classify_question(""), ResponseTopic::Capabilities);
    }

    #[test]
    fn configure_extracts_all_three_classes() {
        let patch = extract_config_patch("316 ultra polished");
        assert_eq!(
            patch,
            ConfigPatch {
                material: Some("steel-316"),
                tolerance: Some("ultra"),
                surface: Some("polished-standard"),
            }
        );
    }

    #[test]
    fn aluminum_always_resolves_to_6061() {
        // The "aluminum" substring fires before the 7075 branch is reached.
        let patch = extract_config_patch("aluminum 7075");
        assert_eq!(patch.material, Some("aluminum-6061"));

        // A bare alloy number still reaches its own branch.
        assert_eq!(extract_config_patch("7075").material, Some("aluminum-7075"));
    }

    #[test]
    fn steel_shadows_316_the_same_way() {
        assert_eq!(extract_config_patch("steel 316").material, Some("steel-304"));
        assert_eq!(extract_config_patch("316").material, Some("steel-316"));
    }

    #[test]
    fn unmatched_classes_stay_untouched() {
        let patch = extract_config_patch("make it shiny");
        assert_eq!(patch, ConfigPatch::default());
        assert!(patch.is_empty());

        let patch = extract_config_patch("titanium please");
        assert_eq!(patch.material, Some("titanium-grade5"));
        assert_eq!(patch.tolerance, None);
        assert_eq!(patch.surface, None);
    }

    #[test]
    fn presets_carry_standard_tolerance() {
        for (code, _) in PRESET_CODES {
            let (_, tolerance, _) = material_preset(code);
            assert_eq!(tolerance, "standard");
        }
        assert_eq!(
            material_preset("titanium"),
            ("titanium-grade5", "standard", "polished-standard")
        );
        // Default-on-miss, not an error.
        assert_eq!(
            material_preset("vibranium"),
            ("aluminum-6061", "standard", "anodized-clear")
        );
    }
}
