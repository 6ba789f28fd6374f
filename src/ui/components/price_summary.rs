use dioxus::prelude::*;

use crate::domain::{price_part, Part};

/// Live quote panel. Costs are recomputed from the part's configuration on
/// every render; the catalog's reference price is shown but never priced.
#[component]
pub fn PriceSummary(part: Option<Part>) -> Element {
    let Some(part) = part else {
        return rsx! {
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Order Summary" }
                p { class: "mt-4 text-sm text-slate-500", "Select a part to see pricing." }
            }
        };
    };

    let breakdown = price_part(&part);
    let reference = format!("${:.2}", part.unit_base_price);

    rsx! {
        section {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
            h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Order Summary" }
            dl { class: "mt-4 space-y-2 text-sm",
                SummaryLine { label: "Unit Cost", value: format!("${:.2}", breakdown.unit_cost) }
                SummaryLine {
                    label: format!("Production ({} pcs)", part.quantity),
                    value: format!("${:.2}", breakdown.production_cost),
                }
                SummaryLine { label: "Shipping", value: format!("${:.2}", breakdown.shipping_cost) }
                SummaryLine { label: "Tax (8.5%)", value: format!("${:.2}", breakdown.tax_cost) }
            }
            div {
                class: "mt-4 flex items-center justify-between border-t border-slate-800 pt-3",
                span { class: "text-sm font-semibold text-slate-200", "Order Total" }
                span { class: "text-lg font-semibold text-indigo-300", {format!("${:.2}", breakdown.order_total)} }
            }
            p { class: "mt-2 text-xs text-slate-600", "Catalog reference price: {reference}/unit" }
        }
    }
}

#[component]
fn SummaryLine(label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            dt { class: "text-slate-400", "{label}" }
            dd { class: "font-medium text-slate-100", "{value}" }
        }
    }
}
