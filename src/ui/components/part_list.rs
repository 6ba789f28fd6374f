use dioxus::prelude::*;

use crate::domain::{Part, PartId};

/// Catalog sidebar. Clicking a row replaces the current selection.
#[component]
pub fn PartList(parts: Vec<Part>, selected_id: Option<PartId>, on_select: EventHandler<PartId>) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-slate-800 bg-slate-900/40",
            header {
                class: "border-b border-slate-800 px-4 py-3",
                h2 { class: "text-sm font-semibold text-slate-200", "Parts" }
            }
            ul {
                class: "divide-y divide-slate-800",
                for part in parts {
                    PartRow {
                        part: part.clone(),
                        selected: selected_id == Some(part.id),
                        on_select: on_select.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn PartRow(part: Part, selected: bool, on_select: EventHandler<PartId>) -> Element {
    let row_class = if selected {
        "flex cursor-pointer items-center gap-3 px-4 py-3 bg-indigo-500/10 border-l-2 border-indigo-400"
    } else {
        "flex cursor-pointer items-center gap-3 px-4 py-3 transition hover:bg-slate-800/40"
    };
    let part_id = part.id;

    rsx! {
        li {
            class: row_class,
            onclick: move |_| on_select.call(part_id),
            span { class: "text-2xl", "{part.display_glyph}" }
            div {
                p { class: "text-sm font-medium text-slate-100", "{part.name}" }
                p { class: "text-xs text-slate-500", "{part.descriptive_config}" }
            }
        }
    }
}
