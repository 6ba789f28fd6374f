use super::entities::Part;

/// Base unit price for a simple machined part before multipliers.
pub const BASE_PRICE: f64 = 50.0;
/// Flat tax applied to production plus shipping. No jurisdiction logic.
pub const TAX_RATE: f64 = 0.085;

/// Four-line quote derived from a part's configuration. Values keep full
/// precision; rounding to two decimals happens at display time only.
#[derive(Clone, Debug, PartialEq)]
pub struct CostBreakdown {
    pub unit_cost: f64,
    pub production_cost: f64,
    pub shipping_cost: f64,
    pub tax_cost: f64,
    pub order_total: f64,
}

/// Multiplier for a material key. Legacy family keys ("steel") price the
/// same as their canonical alloy; unknown keys are neutral.
pub fn material_multiplier(key: &str) -> f64 {
    match key {
        "aluminum-6061" => 1.0,
        "aluminum-7075" => 1.3,
        "steel-304" => 1.8,
        "steel-316" => 2.5,
        "titanium-grade5" => 8.0,
        "plastic-abs" => 0.6,
        "nylon-66" => 0.8,
        "aluminum" => 1.0,
        "steel" => 2.5,
        "titanium" => 8.0,
        "plastic" => 0.6,
        "nylon" => 0.8,
        _ => 1.0,
    }
}

pub fn tolerance_multiplier(key: &str) -> f64 {
    match key {
        "loose" => 0.8,
        "standard" => 1.0,
        "precision" => 1.5,
        "ultra" => 2.5,
        "critical" => 4.0,
        _ => 1.0,
    }
}

pub fn finish_multiplier(key: &str) -> f64 {
    match key {
        "as-machined" => 1.0,
        "bead-blasted" => 1.2,
        "polished-standard" => 1.5,
        "anodized-clear" => 1.8,
        "chrome-plated" => 2.5,
        "powder-coat" => 1.6,
        "mirror-polish" => 2.0,
        _ => 1.0,
    }
}

pub fn unit_cost(material: &str, tolerance: &str, surface: &str) -> f64 {
    BASE_PRICE
        * material_multiplier(material)
        * tolerance_multiplier(tolerance)
        * finish_multiplier(surface)
}

/// Tiered flat shipping rate, evaluated against production cost rather
/// than the order total.
pub fn shipping_cost(production_cost: f64) -> f64 {
    if production_cost < 100.0 {
        25.0
    } else if production_cost < 500.0 {
        35.0
    } else {
        45.0
    }
}

/// Total over any syntactically valid part; unrecognised attribute keys
/// degrade to neutral multipliers instead of failing.
pub fn price_part(part: &Part) -> CostBreakdown {
    let unit = unit_cost(&part.material, &part.tolerance, &part.surface);
    let quantity = part.quantity.max(1) as f64;
    let production = unit * quantity;
    let shipping = shipping_cost(production);
    let tax = (production + shipping) * TAX_RATE;

    CostBreakdown {
        unit_cost: unit,
        production_cost: production,
        shipping_cost: shipping,
        tax_cost: tax,
        order_total: production + shipping + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_parts;
    use pretty_assertions::assert_eq;

    fn part_with(material: &str, tolerance: &str, surface: &str, quantity: u32) -> Part {
        Part {
            id: 99,
            name: "Test Part".to_string(),
            descriptive_config: String::new(),
            display_glyph: "🔩",
            material: material.to_string(),
            tolerance: tolerance.to_string(),
            surface: surface.to_string(),
            quantity,
            unit_base_price: 0.0,
        }
    }

    #[test]
    fn unit_cost_is_product_of_table_lookups() {
        assert_eq!(unit_cost("aluminum-6061", "standard", "as-machined"), 50.0);
        assert_eq!(unit_cost("steel-316", "precision", "bead-blasted"), 50.0 * 2.5 * 1.5 * 1.2);
        assert_eq!(unit_cost("titanium-grade5", "critical", "mirror-polish"), 50.0 * 8.0 * 4.0 * 2.0);
    }

    #[test]
    fn unknown_keys_fall_back_to_neutral_multipliers() {
        assert_eq!(unit_cost("kryptonite", "whatever", "sparkly"), 50.0);
        assert_eq!(unit_cost("steel", "whatever", "sparkly"), 50.0 * 2.5);
    }

    #[test]
    fn unit_cost_is_strictly_positive_for_all_known_keys() {
        let materials = [
            "aluminum-6061",
            "aluminum-7075",
            "steel-304",
            "steel-316",
            "titanium-grade5",
            "plastic-abs",
            "nylon-66",
            "aluminum",
            "steel",
            "titanium",
            "plastic",
            "nylon",
        ];
        let tolerances = ["loose", "standard", "precision", "ultra", "critical"];
        let surfaces = [
            "as-machined",
            "bead-blasted",
            "polished-standard",
            "anodized-clear",
            "chrome-plated",
            "powder-coat",
            "mirror-polish",
        ];

        for material in materials {
            for tolerance in tolerances {
                for surface in surfaces {
                    let cost = unit_cost(material, tolerance, surface);
                    assert!(cost > 0.0, "{material}/{tolerance}/{surface} priced {cost}");
                    let expected = BASE_PRICE
                        * material_multiplier(material)
                        * tolerance_multiplier(tolerance)
                        * finish_multiplier(surface);
                    assert_eq!(cost, expected);
                }
            }
        }
    }

    #[test]
    fn shipping_tiers_at_documented_breakpoints() {
        assert_eq!(shipping_cost(0.0), 25.0);
        assert_eq!(shipping_cost(99.99), 25.0);
        assert_eq!(shipping_cost(100.0), 35.0);
        assert_eq!(shipping_cost(499.99), 35.0);
        assert_eq!(shipping_cost(500.0), 45.0);
        assert_eq!(shipping_cost(1_000_000.0), 45.0);
    }

    #[test]
    fn shipping_is_monotonic_non_decreasing() {
        let mut previous = 0.0;
        let mut value = 0.0;
        while value < 700.0 {
            let cost = shipping_cost(value);
            assert!(cost >= previous, "shipping regressed at {value}");
            previous = cost;
            value += 0.25;
        }
    }

    #[test]
    fn tax_is_flat_rate_on_production_plus_shipping() {
        let breakdown = price_part(&part_with("aluminum", "standard", "as-machined", 3));
        assert_eq!(
            breakdown.tax_cost,
            (breakdown.production_cost + breakdown.shipping_cost) * 0.085
        );
    }

    #[test]
    fn worked_example_steel_ultra_unknown_finish() {
        // "anodized" is not in the finish cost table; it must price neutral.
        let breakdown = price_part(&part_with("steel", "ultra", "anodized", 8));
        assert_eq!(breakdown.unit_cost, 312.5);
        assert_eq!(breakdown.production_cost, 2500.0);
        assert_eq!(breakdown.shipping_cost, 45.0);
        assert_eq!(breakdown.tax_cost, 0.085 * 2545.0);
        assert_eq!(breakdown.order_total, 2500.0 + 45.0 + 0.085 * 2545.0);
    }

    #[test]
    fn catalog_parts_all_produce_finite_quotes() {
        for part in sample_parts() {
            let breakdown = price_part(&part);
            assert!(breakdown.order_total.is_finite());
            assert!(breakdown.order_total > 0.0, "{} quoted zero", part.name);
        }
    }
}
