use dioxus::prelude::*;

use crate::domain::AppState;
use crate::ui::components::{
    chat_panel::ChatPanel, config_form::ConfigForm, part_list::PartList,
    price_summary::PriceSummary, viewer_panel::ViewerPanel,
};

/// Single-page workbench: catalog on the left, configuration and pricing in
/// the middle column, assistant on the right.
#[component]
pub fn WorkbenchPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let parts = state.with(|st| st.parts.clone());
    let selected_id = state.with(|st| st.selected_part);
    let current = state.with(|st| st.current_part().cloned());

    rsx! {
        div {
            class: "grid gap-6 lg:grid-cols-[260px_1fr_380px]",
            PartList {
                parts,
                selected_id,
                on_select: move |id| state.with_mut(|st| st.select_part(id)),
            }
            div {
                class: "flex flex-col gap-6",
                ViewerPanel { part: current.clone() }
                ConfigForm {
                    part: current.clone(),
                    on_material: move |key: String| state.with_mut(|st| st.set_material(key)),
                    on_tolerance: move |key: String| state.with_mut(|st| st.set_tolerance(key)),
                    on_surface: move |key: String| state.with_mut(|st| st.set_surface(key)),
                    on_quantity: move |raw: String| state.with_mut(|st| st.set_quantity_from_input(&raw)),
                }
                PriceSummary { part: current }
            }
            ChatPanel {}
        }
    }
}
