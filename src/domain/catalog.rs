use super::entities::Part;

/// Fixed catalog seeded once at startup. Parts are edited in place during
/// the session; the user never adds or removes entries.
pub fn sample_parts() -> Vec<Part> {
    vec![
        Part {
            id: 1,
            name: "Bracket Assembly".to_string(),
            descriptive_config: "Aluminum 6061, Standard Tolerance".to_string(),
            display_glyph: "🔧",
            material: "aluminum".to_string(),
            tolerance: "standard".to_string(),
            surface: "as-machined".to_string(),
            quantity: 10,
            unit_base_price: 45.50,
        },
        Part {
            id: 2,
            name: "Housing Cover".to_string(),
            descriptive_config: "Stainless Steel 316, Precision".to_string(),
            display_glyph: "📦",
            material: "steel".to_string(),
            tolerance: "precision".to_string(),
            surface: "bead-blasted".to_string(),
            quantity: 5,
            unit_base_price: 89.99,
        },
        Part {
            id: 3,
            name: "Gear Shaft".to_string(),
            descriptive_config: "Titanium Grade 5, Ultra Precision".to_string(),
            display_glyph: "⚙️",
            material: "titanium".to_string(),
            tolerance: "ultra".to_string(),
            surface: "polished".to_string(),
            quantity: 25,
            unit_base_price: 156.75,
        },
        Part {
            id: 4,
            name: "Mounting Plate".to_string(),
            descriptive_config: "ABS Plastic, Standard Tolerance".to_string(),
            display_glyph: "📋",
            material: "plastic".to_string(),
            tolerance: "standard".to_string(),
            surface: "as-machined".to_string(),
            quantity: 50,
            unit_base_price: 12.25,
        },
        Part {
            id: 5,
            name: "Connector Block".to_string(),
            descriptive_config: "Nylon 6/6, Precision".to_string(),
            display_glyph: "🔌",
            material: "nylon".to_string(),
            tolerance: "precision".to_string(),
            surface: "as-machined".to_string(),
            quantity: 15,
            unit_base_price: 34.80,
        },
        Part {
            id: 6,
            name: "Valve Body".to_string(),
            descriptive_config: "Stainless Steel 316, Ultra Precision".to_string(),
            display_glyph: "🔘",
            material: "steel".to_string(),
            tolerance: "ultra".to_string(),
            surface: "anodized".to_string(),
            quantity: 8,
            unit_base_price: 234.50,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let parts = sample_parts();
        let mut ids: Vec<_> = parts.iter().map(|part| part.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), parts.len());
    }

    #[test]
    fn catalog_quantities_are_positive() {
        assert!(sample_parts().iter().all(|part| part.quantity >= 1));
    }
}
