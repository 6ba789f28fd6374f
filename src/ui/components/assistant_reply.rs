use dioxus::prelude::*;

use crate::domain::{AppState, BulletSize, BulletStyle, BulletTheme, ResponseTopic, PRESET_CODES};

struct MaterialPoint {
    headline: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const MATERIAL_POINTS: &[MaterialPoint] = &[
    MaterialPoint {
        headline: "1018 Steel: low-stress applications, cost-effective",
        description: "Ideal for structural components, brackets, and general purpose parts",
        tags: &["Economical", "Good Strength"],
    },
    MaterialPoint {
        headline: "6061-T6: general purpose aluminum, good strength-to-weight",
        description: "Excellent for aerospace, automotive, and consumer applications",
        tags: &["Lightweight", "Corrosion Resistant"],
    },
    MaterialPoint {
        headline: "304 SS: moderate corrosion resistance, versatile",
        description: "Perfect for food processing, medical, and marine environments",
        tags: &["Corrosion Resistant", "Hygienic"],
    },
    MaterialPoint {
        headline: "Brass 360: easy machining, good conductivity",
        description: "Great for electrical components and decorative parts",
        tags: &["Conductive", "Easy Machining"],
    },
    MaterialPoint {
        headline: "ABS Plastic: lightweight, impact resistant",
        description: "Excellent for prototypes, housings, and consumer products",
        tags: &["Lightweight", "Impact Resistant"],
    },
];

const FINISH_CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Cost-Effective Finishes",
        &[
            ("As Machined", "Standard finish, most economical"),
            ("Bead Blasted", "Uniform matte finish, hides machining marks"),
            ("Sand Blasted", "Textured finish, good for grip"),
        ],
    ),
    (
        "Appearance Finishes",
        &[
            ("Polished", "Smooth, reflective finish, excellent appearance"),
            ("Brushed", "Linear texture, modern look"),
            ("Mirror Polish", "Highly reflective, premium appearance"),
        ],
    ),
    (
        "Protective Finishes",
        &[
            ("Anodized", "Corrosion protection + color options (aluminum only)"),
            ("Chrome Plated", "Hard, decorative finish"),
            ("Nickel Plated", "Corrosion resistance, decorative"),
        ],
    ),
    (
        "Specialty Finishes",
        &[
            ("Powder Coat", "Durable, wide color selection"),
            ("PVD Coating", "Hard, decorative, wear-resistant"),
            ("Ceramic Coating", "Ultra-hard, chemical resistant"),
        ],
    ),
];

#[derive(PartialEq)]
struct InfoCard {
    icon: &'static str,
    title: &'static str,
    badge: &'static str,
    details: &'static [(&'static str, &'static str)],
}

const TOLERANCE_CARDS: &[InfoCard] = &[
    InfoCard {
        icon: "📏",
        title: "Standard (±0.1mm)",
        badge: "Most Economical",
        details: &[
            ("Best for", "Most general applications"),
            ("Cost", "Most economical"),
            ("Applications", "Consumer products, prototypes, non-critical parts"),
            ("Typical use", "Housings, brackets, general components"),
        ],
    },
    InfoCard {
        icon: "🎯",
        title: "Precision (±0.05mm)",
        badge: "Moderate Increase",
        details: &[
            ("Best for", "Assembly parts, mechanical components"),
            ("Cost", "Moderate increase"),
            ("Applications", "Gears, bearings, mating parts"),
            ("Typical use", "Automotive, machinery, precision assemblies"),
        ],
    },
    InfoCard {
        icon: "🔬",
        title: "Ultra Precision (±0.02mm)",
        badge: "Significant Increase",
        details: &[
            ("Best for", "Critical applications, tight fits"),
            ("Cost", "Significant increase"),
            ("Applications", "Medical devices, aerospace, instrumentation"),
            ("Typical use", "Surgical instruments, measurement devices"),
        ],
    },
    InfoCard {
        icon: "⚡",
        title: "Critical (±0.005mm)",
        badge: "Highest Cost",
        details: &[
            ("Best for", "Ultra-critical applications"),
            ("Cost", "Highest"),
            ("Applications", "Metrology, research, specialized equipment"),
            ("Typical use", "Calibration standards, research instruments"),
        ],
    },
];

const PROCESS_CARDS: &[InfoCard] = &[
    InfoCard {
        icon: "🔧",
        title: "CNC Machining",
        badge: "Excellent Quality",
        details: &[
            ("Best for", "Complex geometries, tight tolerances"),
            ("Materials", "Metals, plastics, composites"),
            ("Lead time", "1-3 weeks"),
            ("Cost", "Medium to high"),
            ("Quality", "Excellent surface finish, precise tolerances"),
        ],
    },
    InfoCard {
        icon: "🖨️",
        title: "3D Printing",
        badge: "Good for Prototypes",
        details: &[
            ("Best for", "Prototypes, complex internal structures"),
            ("Materials", "Plastics, resins, some metals"),
            ("Lead time", "1-7 days"),
            ("Cost", "Low to medium"),
            ("Quality", "Good for prototypes, limited strength"),
        ],
    },
    InfoCard {
        icon: "📋",
        title: "Sheet Metal",
        badge: "Good for Flat Parts",
        details: &[
            ("Best for", "Enclosures, brackets, flat parts"),
            ("Materials", "Steel, aluminum, brass"),
            ("Lead time", "1-2 weeks"),
            ("Cost", "Low to medium"),
            ("Quality", "Good for flat parts, limited complexity"),
        ],
    },
    InfoCard {
        icon: "🏭",
        title: "Injection Molding",
        badge: "Excellent for Mass Production",
        details: &[
            ("Best for", "High-volume plastic parts"),
            ("Materials", "Thermoplastics"),
            ("Lead time", "4-8 weeks (tooling)"),
            ("Cost", "High initial, low per-part"),
            ("Quality", "Excellent for mass production"),
        ],
    },
];

const COST_MATERIALS: &[(&str, &str, &str)] = &[
    ("Aluminum 6061", "$2-5/lb", "Most economical"),
    ("Stainless Steel 316", "$8-15/lb", "Moderate"),
    ("Titanium Grade 5", "$25-50/lb", "Expensive"),
    ("ABS Plastic", "$1-3/lb", "Very economical"),
];

const COST_FACTORS: &[(&str, &str)] = &[
    ("Quantity", "Higher volumes = lower per-part cost"),
    ("Complexity", "Simple shapes = lower machining cost"),
    ("Tolerances", "Tighter tolerances = higher cost"),
    ("Surface finish", "Special finishes add 20-50% cost"),
];

const COST_TIPS: &[&str] = &[
    "Use standard materials when possible",
    "Simplify geometry to reduce machining time",
    "Consider 3D printing for prototypes",
    "Order in larger quantities for better pricing",
];

const CAPABILITY_CARDS: &[(&str, &str, &[&str])] = &[
    (
        "🔧",
        "Material Selection",
        &[
            "Aluminum, Steel, Titanium, Plastics",
            "Material properties and applications",
            "Cost vs. performance trade-offs",
        ],
    ),
    (
        "🏭",
        "Manufacturing Processes",
        &[
            "CNC Machining, 3D Printing, Sheet Metal",
            "Process selection and optimization",
            "Lead times and cost factors",
        ],
    ),
    (
        "📐",
        "Design Considerations",
        &[
            "Tolerances, Finishes, Cost Optimization",
            "Design for manufacturability",
            "Quality and reliability factors",
        ],
    ),
    (
        "✅",
        "Quality Assurance",
        &[
            "Inspection methods and standards",
            "Testing procedures and certifications",
            "Quality control best practices",
        ],
    ),
];

/// Renders the canned template for one reply topic. Only the material
/// guide is interactive: it carries the preset buttons and the bullet
/// style toggle.
#[component]
pub fn AssistantReply(topic: ResponseTopic, on_preset: EventHandler<String>) -> Element {
    match topic {
        ResponseTopic::Material => rsx! { MaterialGuide { on_preset } },
        ResponseTopic::SurfaceFinish => rsx! { FinishGuide {} },
        ResponseTopic::Tolerance => rsx! {
            CardGuide {
                heading: "Tolerance Levels",
                subtitle: "Choose the right precision for your application:",
                cards: TOLERANCE_CARDS,
                footer: "What's your application's precision requirement?",
            }
        },
        ResponseTopic::Process => rsx! {
            CardGuide {
                heading: "Manufacturing Process Guide",
                subtitle: "Choose the right process for your part:",
                cards: PROCESS_CARDS,
                footer: "What type of part are you making?",
            }
        },
        ResponseTopic::Cost => rsx! { CostGuide {} },
        ResponseTopic::Capabilities => rsx! { CapabilitiesCard {} },
    }
}

#[component]
fn ReplyHeading(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div {
            h3 { class: "text-sm font-semibold text-slate-100", "{title}" }
            p { class: "text-xs text-slate-400", "{subtitle}" }
        }
    }
}

#[component]
fn ReplyFooter(prompt: &'static str) -> Element {
    rsx! {
        p { class: "mt-3 border-t border-slate-800 pt-2 text-xs font-semibold text-slate-300", "{prompt}" }
    }
}

#[component]
fn MaterialGuide(on_preset: EventHandler<String>) -> Element {
    let state = use_context::<Signal<AppState>>();
    let prefs = state.with(|st| st.bullet_prefs);

    rsx! {
        div {
            class: "space-y-3",
            ReplyHeading {
                title: "Material Selection Guide",
                subtitle: "Here are the best materials for your application:",
            }
            BulletStyleToggle {}
            ul {
                class: "space-y-2",
                for (index, point) in MATERIAL_POINTS.iter().enumerate() {
                    li {
                        class: "flex gap-2 {prefs.size.text_class()}",
                        span { class: "{prefs.theme.marker_class()} font-semibold", {prefs.style.marker(index)} }
                        div {
                            p { class: "text-slate-200", "{point.headline}" }
                            p { class: "text-xs text-slate-500", "{point.description}" }
                            div { class: "mt-1 flex flex-wrap gap-1",
                                for tag in point.tags {
                                    span {
                                        class: "rounded-full border border-slate-700 px-2 py-0.5 text-[10px] uppercase tracking-wide text-slate-400",
                                        "{tag}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            p {
                class: "text-xs font-semibold text-slate-300",
                "What's your primary requirement: strength, weight, corrosion resistance, or cost?"
            }
            div {
                p { class: "text-xs font-semibold uppercase tracking-wide text-slate-500", "Configure Specific Materials:" }
                div { class: "mt-1 flex flex-wrap gap-2",
                    for (code, label) in PRESET_CODES {
                        button {
                            class: "rounded-md border border-indigo-500/40 px-2 py-1 text-[11px] font-semibold text-indigo-200 hover:bg-indigo-500/10",
                            onclick: move |_| on_preset.call((*code).to_string()),
                            "{label}"
                        }
                    }
                }
            }
            ReplyFooter { prompt: "Choose a material above to configure it, or ask me about specific properties!" }
        }
    }
}

/// Bullet presentation controls. Writes straight to the shared app state
/// so every material guide in the transcript restyles together.
#[component]
fn BulletStyleToggle() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let prefs = state.with(|st| st.bullet_prefs);

    rsx! {
        div {
            class: "flex flex-wrap items-center gap-3 rounded-lg border border-slate-800 bg-slate-950/60 px-3 py-2 text-[11px]",
            div { class: "flex items-center gap-1",
                span { class: "text-slate-500", "Style:" }
                for style in BulletStyle::ALL {
                    button {
                        class: toggle_class(prefs.style == *style),
                        title: style.name(),
                        onclick: move |_| state.with_mut(|st| st.bullet_prefs.style = *style),
                        {style.marker(0)}
                    }
                }
            }
            div { class: "flex items-center gap-1",
                span { class: "text-slate-500", "Theme:" }
                for theme in BulletTheme::ALL {
                    button {
                        class: toggle_class(prefs.theme == *theme),
                        title: theme.name(),
                        onclick: move |_| state.with_mut(|st| st.bullet_prefs.theme = *theme),
                        span { class: "{theme.marker_class()}", "●" }
                    }
                }
            }
            div { class: "flex items-center gap-1",
                span { class: "text-slate-500", "Size:" }
                for size in BulletSize::ALL {
                    button {
                        class: toggle_class(prefs.size == *size),
                        title: size.name(),
                        onclick: move |_| state.with_mut(|st| st.bullet_prefs.size = *size),
                        span { class: "{size.text_class()}", "•" }
                    }
                }
            }
        }
    }
}

fn toggle_class(active: bool) -> &'static str {
    if active {
        "rounded border border-indigo-500/60 bg-indigo-500/15 px-1.5 py-0.5 text-indigo-200"
    } else {
        "rounded border border-slate-800 px-1.5 py-0.5 text-slate-400 hover:border-slate-600"
    }
}

#[component]
fn FinishGuide() -> Element {
    rsx! {
        div {
            class: "space-y-3",
            ReplyHeading {
                title: "Surface Finish Options",
                subtitle: "Choose the right finish for your needs:",
            }
            for (category, options) in FINISH_CATEGORIES {
                div {
                    h4 { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "{category}" }
                    ul { class: "mt-1 space-y-1",
                        for (name, desc) in *options {
                            li { class: "flex items-baseline justify-between gap-3 text-sm",
                                span { class: "font-medium text-slate-200", "{name}" }
                                span { class: "text-right text-xs text-slate-500", "{desc}" }
                            }
                        }
                    }
                }
            }
            ReplyFooter { prompt: "What's your priority: cost, appearance, or functionality?" }
        }
    }
}

#[component]
fn CardGuide(
    heading: &'static str,
    subtitle: &'static str,
    cards: &'static [InfoCard],
    footer: &'static str,
) -> Element {
    rsx! {
        div {
            class: "space-y-3",
            ReplyHeading { title: heading, subtitle }
            div { class: "grid gap-2 sm:grid-cols-2",
                for card in cards {
                    div {
                        class: "rounded-lg border border-slate-800 bg-slate-950/60 p-3",
                        div { class: "flex items-center gap-2",
                            span { class: "text-lg", "{card.icon}" }
                            h4 { class: "text-sm font-semibold text-slate-100", "{card.title}" }
                        }
                        span {
                            class: "mt-1 inline-block rounded-full border border-slate-700 px-2 py-0.5 text-[10px] uppercase tracking-wide text-slate-400",
                            "{card.badge}"
                        }
                        dl { class: "mt-2 space-y-1 text-xs",
                            for (label, value) in card.details {
                                div {
                                    dt { class: "inline font-semibold text-slate-300", "{label}: " }
                                    dd { class: "inline text-slate-400", "{value}" }
                                }
                            }
                        }
                    }
                }
            }
            ReplyFooter { prompt: footer }
        }
    }
}

#[component]
fn CostGuide() -> Element {
    rsx! {
        div {
            class: "space-y-3",
            ReplyHeading {
                title: "Cost Optimization Guide",
                subtitle: "Understand what drives costs and how to optimize:",
            }
            div {
                h4 { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "Material Cost Factors" }
                ul { class: "mt-1 space-y-1",
                    for (name, range, note) in COST_MATERIALS {
                        li { class: "flex items-baseline justify-between gap-3 text-sm",
                            span { class: "font-medium text-slate-200", "{name}" }
                            span { class: "text-xs text-slate-400", "{range}" }
                            span { class: "text-xs text-slate-500", "{note}" }
                        }
                    }
                }
            }
            div {
                h4 { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "Manufacturing Cost Factors" }
                ul { class: "mt-1 space-y-1",
                    for (factor, effect) in COST_FACTORS {
                        li { class: "text-sm",
                            span { class: "font-semibold text-slate-300", "{factor}: " }
                            span { class: "text-slate-400", "{effect}" }
                        }
                    }
                }
            }
            div {
                h4 { class: "text-xs font-semibold uppercase tracking-wide text-slate-400", "Cost-Saving Tips" }
                ul { class: "mt-1 space-y-1",
                    for tip in COST_TIPS {
                        li { class: "flex gap-2 text-sm text-slate-300",
                            span { class: "text-emerald-400", "✓" }
                            "{tip}"
                        }
                    }
                }
            }
            ReplyFooter { prompt: "What's your budget range?" }
        }
    }
}

#[component]
fn CapabilitiesCard() -> Element {
    rsx! {
        div {
            class: "space-y-3",
            ReplyHeading {
                title: "I'm your expert mechanical engineering assistant!",
                subtitle: "Here's how I can help you:",
            }
            div { class: "grid gap-2 sm:grid-cols-2",
                for (icon, title, points) in CAPABILITY_CARDS {
                    div {
                        class: "rounded-lg border border-slate-800 bg-slate-950/60 p-3",
                        div { class: "flex items-center gap-2",
                            span { class: "text-lg", "{icon}" }
                            h4 { class: "text-sm font-semibold text-slate-100", "{title}" }
                        }
                        ul { class: "mt-2 space-y-1",
                            for point in *points {
                                li { class: "text-xs text-slate-400", "• {point}" }
                            }
                        }
                    }
                }
            }
            ReplyFooter {
                prompt: "Ask me about any specific aspect of mechanical engineering, materials, or manufacturing!"
            }
        }
    }
}
