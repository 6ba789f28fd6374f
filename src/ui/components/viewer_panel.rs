use dioxus::prelude::*;

use crate::domain::{material_color, material_label, Part};

/// Stub 3D preview. Real geometry is out of scope; the panel only toggles
/// between a placeholder and a material-tinted stand-in based on whether a
/// part is selected.
#[component]
pub fn ViewerPanel(part: Option<Part>) -> Element {
    let body = match part {
        Some(part) => {
            let tint = material_color(&part.material);
            let label = material_label(&part.material).to_string();
            rsx! {
                div {
                    class: "flex flex-1 flex-col items-center justify-center gap-2 py-6",
                    div {
                        class: "flex h-24 w-24 items-center justify-center rounded-2xl border border-slate-700 text-5xl",
                        style: "background-color: {tint}33; box-shadow: 0 0 40px {tint}22;",
                        "{part.display_glyph}"
                    }
                    p { class: "text-sm text-slate-300", "{part.name}" }
                    p { class: "text-xs text-slate-500", "{label}" }
                }
            }
        }
        None => rsx! {
            div {
                class: "flex flex-1 items-center justify-center py-6",
                p { class: "text-sm text-slate-500", "Select a part to preview it." }
            }
        },
    };

    rsx! {
        section {
            class: "flex min-h-[220px] flex-col rounded-xl border border-slate-800 bg-slate-900/40",
            header {
                class: "flex items-center justify-between border-b border-slate-800 px-4 py-3",
                h2 { class: "text-sm font-semibold text-slate-200", "3D Preview" }
                span { class: "text-xs text-slate-600", "preview only" }
            }
            {body}
        }
    }
}
