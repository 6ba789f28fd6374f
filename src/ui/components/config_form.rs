use dioxus::prelude::*;

use crate::domain::Part;

const MATERIAL_OPTIONS: &[(&str, &str)] = &[
    ("aluminum-6061", "Aluminum 6061-T6"),
    ("aluminum-7075", "Aluminum 7075-T6"),
    ("steel-304", "Stainless Steel 304"),
    ("steel-316", "Stainless Steel 316"),
    ("titanium-grade5", "Titanium Grade 5"),
    ("plastic-abs", "ABS Plastic"),
    ("nylon-66", "Nylon 6/6"),
    // Legacy family keys still seeded by the catalog.
    ("aluminum", "Aluminum (legacy)"),
    ("steel", "Stainless Steel (legacy)"),
    ("titanium", "Titanium (legacy)"),
    ("plastic", "Plastic (legacy)"),
    ("nylon", "Nylon (legacy)"),
];

const TOLERANCE_OPTIONS: &[(&str, &str)] = &[
    ("loose", "Loose (±0.2mm)"),
    ("standard", "Standard (±0.1mm)"),
    ("precision", "Precision (±0.05mm)"),
    ("ultra", "Ultra Precision (±0.02mm)"),
    ("critical", "Critical (±0.005mm)"),
];

const SURFACE_OPTIONS: &[(&str, &str)] = &[
    ("as-machined", "As Machined"),
    ("bead-blasted", "Bead Blasted"),
    ("polished-standard", "Polished"),
    ("anodized-clear", "Anodized (clear)"),
    ("chrome-plated", "Chrome Plated"),
    ("powder-coat", "Powder Coat"),
    ("mirror-polish", "Mirror Polish"),
];

/// Configuration form for the selected part. Every change writes straight
/// through to the part record via the handlers, so edits survive switching
/// parts and coming back.
#[component]
pub fn ConfigForm(
    part: Option<Part>,
    on_material: EventHandler<String>,
    on_tolerance: EventHandler<String>,
    on_surface: EventHandler<String>,
    on_quantity: EventHandler<String>,
) -> Element {
    let Some(part) = part else {
        return rsx! {
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Configuration" }
                p { class: "mt-4 text-sm text-slate-500", "Select a part to configure it." }
            }
        };
    };

    rsx! {
        section {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
            h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Configuration" }
            div { class: "mt-4 grid gap-4 sm:grid-cols-2",
                div {
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Material" }
                    select {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                        value: part.material.clone(),
                        onchange: move |evt| on_material.call(evt.value()),
                        for (key, label) in MATERIAL_OPTIONS {
                            option { value: *key, selected: part.material == *key, "{label}" }
                        }
                    }
                }
                div {
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Tolerance" }
                    select {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                        value: part.tolerance.clone(),
                        onchange: move |evt| on_tolerance.call(evt.value()),
                        for (key, label) in TOLERANCE_OPTIONS {
                            option { value: *key, selected: part.tolerance == *key, "{label}" }
                        }
                    }
                }
                div {
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Surface Finish" }
                    select {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                        value: part.surface.clone(),
                        onchange: move |evt| on_surface.call(evt.value()),
                        for (key, label) in SURFACE_OPTIONS {
                            option { value: *key, selected: part.surface == *key, "{label}" }
                        }
                    }
                }
                div {
                    label { class: "block text-xs font-semibold uppercase text-slate-500", "Quantity" }
                    input {
                        class: "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
                        inputmode: "numeric",
                        value: part.quantity.to_string(),
                        oninput: move |evt| on_quantity.call(evt.value()),
                    }
                }
            }
        }
    }
}
