use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/80 px-6 py-4 backdrop-blur",
                div { class: "mx-auto flex max-w-7xl items-baseline justify-between",
                    h1 { class: "text-xl font-semibold tracking-tight", "{APP_NAME}" }
                    span { class: "text-xs text-slate-600", {version_label()} }
                }
            }
            main { class: "mx-auto max-w-7xl px-6 py-8",
                {children}
            }
        }
    }
}
