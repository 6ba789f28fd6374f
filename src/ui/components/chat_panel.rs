use std::time::Duration;

use dioxus::html::Key;
use dioxus::prelude::*;
use rand::Rng;
use time::macros::format_description;

use super::assistant_reply::AssistantReply;
use super::toast::{push_toast, ToastKind, ToastMessage};
use crate::domain::{
    classify_question, extract_config_patch, material_label, parse_slash_command, surface_label,
    tolerance_label, AppState, ChatBody, ChatEntry, ChatRole, IntentTag, SlashCommand,
};

/// Simulated reply latency in milliseconds, sampled per question.
const THINKING_DELAY_MS: std::ops::RangeInclusive<u64> = 1000..=2000;

const COMMAND_SUGGESTIONS: &[(&str, &str)] = &[
    ("/ask", "Tag your next message as a question for the assistant"),
    ("/configure", "Tag your next message as a configuration request"),
    ("/help", "Show what the assistant can do"),
];

/// Panel beneath the input while a slash interaction is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DropdownState {
    Hidden,
    /// Unrecognised slash text; lists the available commands.
    Suggestions,
    Help,
    /// A command just armed a pill; confirms what the next message will do.
    Confirmed(IntentTag),
}

#[component]
pub fn ChatPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut input = use_signal(String::new);
    let mut dropdown = use_signal(|| DropdownState::Hidden);
    let mut minimized = use_signal(|| false);

    let pending_tag = state.with(|st| st.pending_tag);
    let entries = state.with(|st| st.conversation.clone());

    let mut submit = move || {
        let text = input.with(|value| value.trim().to_string());
        if text.is_empty() {
            return;
        }
        input.set(String::new());
        dropdown.set(DropdownState::Hidden);

        let tag = state.with_mut(|st| st.take_pending_tag());
        if tag == Some(IntentTag::Configure) {
            if state.with(|st| st.current_part().is_none()) {
                push_toast(toasts, ToastKind::Warning, "Select a part before configuring it.");
                return;
            }
            // Silent handler: the part record changes, the transcript does not.
            let patch = extract_config_patch(&text);
            state.with_mut(|st| st.apply_patch(&patch));
            return;
        }

        let topic = classify_question(&text);
        let entry_id = state.with_mut(|st| {
            st.push_user(text);
            st.push_thinking()
        });
        let delay = rand::rng().random_range(THINKING_DELAY_MS);
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            state.with_mut(|st| st.resolve_thinking(&entry_id, ChatBody::Topic(topic)));
        });
    };

    let on_preset = EventHandler::new(move |code: String| {
        if state.with(|st| st.current_part().is_none()) {
            push_toast(toasts, ToastKind::Warning, "Select a part before configuring it.");
            return;
        }
        state.with_mut(|st| {
            let (material, tolerance, surface) = st.apply_preset(&code);
            st.push_assistant(ChatBody::PresetApplied {
                material,
                tolerance,
                surface,
            });
        });
    });

    let dropdown_view = match dropdown() {
        DropdownState::Hidden => None,
        DropdownState::Suggestions => Some(rsx! { CommandSuggestions {} }),
        DropdownState::Help => Some(rsx! { HelpDropdown {} }),
        DropdownState::Confirmed(tag) => Some(rsx! { ConfirmationDropdown { tag } }),
    };

    let pill = pending_tag.map(|tag| {
        rsx! {
            div {
                class: "mb-2 inline-flex items-center gap-2 rounded-full border border-indigo-500/50 bg-indigo-500/10 px-3 py-1 text-xs font-semibold text-indigo-200",
                "{tag.label()}"
                button {
                    class: "text-indigo-300 hover:text-white",
                    onclick: move |_| {
                        state.with_mut(|st| st.clear_pending_tag());
                        dropdown.set(DropdownState::Hidden);
                    },
                    "×"
                }
            }
        }
    });

    let body = if minimized() {
        None
    } else {
        Some(rsx! {
            ul {
                class: "flex-1 space-y-4 overflow-y-auto px-4 py-3",
                if entries.is_empty() {
                    li {
                        class: "py-8 text-center text-sm text-slate-500",
                        "Ask about materials, finishes, tolerances, or costs."
                    }
                }
                for entry in entries {
                    ChatMessage { key: "{entry.id}", entry: entry.clone(), on_preset }
                }
            }
            div {
                class: "border-t border-slate-800 px-4 py-3",
                {pill}
                {dropdown_view}
                div {
                    class: "flex items-center gap-2",
                    input {
                        class: "flex-1 rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 placeholder:text-slate-600 focus:border-indigo-500 focus:outline-none",
                        placeholder: "Message, or / for commands…",
                        value: input(),
                        oninput: move |evt| {
                            let value = evt.value();
                            if value.starts_with('/') {
                                match parse_slash_command(&value) {
                                    SlashCommand::Ask => {
                                        state.with_mut(|st| st.set_pending_tag(IntentTag::Ask));
                                        input.set(String::new());
                                        dropdown.set(DropdownState::Confirmed(IntentTag::Ask));
                                    }
                                    SlashCommand::Configure => {
                                        state.with_mut(|st| st.set_pending_tag(IntentTag::Configure));
                                        input.set(String::new());
                                        dropdown.set(DropdownState::Confirmed(IntentTag::Configure));
                                    }
                                    SlashCommand::Help => {
                                        input.set(String::new());
                                        dropdown.set(DropdownState::Help);
                                    }
                                    SlashCommand::Unknown => {
                                        input.set(value);
                                        dropdown.set(DropdownState::Suggestions);
                                    }
                                }
                            } else {
                                input.set(value);
                                dropdown.set(DropdownState::Hidden);
                            }
                        },
                        onkeydown: move |evt| match evt.key() {
                            Key::Enter => {
                                evt.prevent_default();
                                submit();
                            }
                            Key::Escape => {
                                input.set(String::new());
                                dropdown.set(DropdownState::Hidden);
                                state.with_mut(|st| st.clear_pending_tag());
                            }
                            _ => {}
                        },
                    }
                    FileUploadButton {}
                    button {
                        class: "rounded-lg bg-indigo-500 px-3 py-2 text-sm font-semibold text-white hover:bg-indigo-400",
                        onclick: move |_| submit(),
                        "Send"
                    }
                }
            }
        })
    };

    rsx! {
        section {
            class: "flex h-full flex-col rounded-xl border border-slate-800 bg-slate-900/40",
            header {
                class: "flex items-center justify-between border-b border-slate-800 px-4 py-3",
                h2 { class: "text-sm font-semibold text-slate-200", "Engineering Assistant" }
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "text-xs uppercase tracking-wide text-slate-500 hover:text-slate-300",
                        onclick: move |_| {
                            state.with_mut(|st| st.clear_conversation());
                            push_toast(toasts, ToastKind::Info, "Conversation cleared.");
                        },
                        "Clear"
                    }
                    button {
                        class: "text-xs uppercase tracking-wide text-slate-500 hover:text-slate-300",
                        onclick: move |_| {
                            let flipped = !minimized();
                            minimized.set(flipped);
                        },
                        if minimized() { "Expand" } else { "Minimize" }
                    }
                }
            }
            {body}
        }
    }
}

#[component]
fn ChatMessage(entry: ChatEntry, on_preset: EventHandler<String>) -> Element {
    let stamp = entry
        .timestamp
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default();
    let (author, author_class) = match entry.role {
        ChatRole::User => ("You", "text-slate-300"),
        ChatRole::Assistant => ("Assistant", "text-indigo-300"),
    };

    let body = match &entry.body {
        ChatBody::Text(text) => rsx! {
            p { class: "text-sm text-slate-200", "{text}" }
        },
        ChatBody::Thinking => rsx! {
            p { class: "animate-pulse text-sm italic text-slate-500", "Thinking…" }
        },
        ChatBody::Topic(topic) => rsx! {
            AssistantReply { topic: *topic, on_preset }
        },
        ChatBody::PresetApplied {
            material,
            tolerance,
            surface,
        } => rsx! {
            div {
                class: "rounded-lg border border-emerald-500/40 bg-emerald-500/10 p-3",
                p { class: "text-sm font-semibold text-emerald-200", "✅ Configuration applied" }
                ul { class: "mt-1 space-y-0.5 text-xs text-emerald-100/80",
                    li { "Material: {material_label(material)}" }
                    li { "Tolerance: {tolerance_label(tolerance)}" }
                    li { "Finish: {surface_label(surface)}" }
                }
            }
        },
    };

    rsx! {
        li {
            div {
                class: "flex items-baseline gap-2",
                span { class: "text-xs font-semibold uppercase tracking-wide {author_class}", "{author}" }
                span { class: "text-[10px] text-slate-600", "{stamp}" }
            }
            div { class: "mt-1", {body} }
        }
    }
}

#[component]
fn CommandSuggestions() -> Element {
    rsx! {
        div {
            class: "mb-2 rounded-lg border border-slate-700 bg-slate-950/80 p-2",
            p { class: "px-1 pb-1 text-[10px] uppercase tracking-wide text-slate-500", "Commands" }
            ul {
                for (command, hint) in COMMAND_SUGGESTIONS {
                    li {
                        class: "flex items-baseline gap-2 px-1 py-0.5 text-xs",
                        span { class: "font-mono font-semibold text-indigo-300", "{command}" }
                        span { class: "text-slate-400", "{hint}" }
                    }
                }
            }
        }
    }
}

#[component]
fn HelpDropdown() -> Element {
    rsx! {
        div {
            class: "mb-2 rounded-lg border border-slate-700 bg-slate-950/80 p-3 text-xs",
            p { class: "font-semibold text-slate-200", "How the assistant works" }
            ul { class: "mt-1 space-y-1 text-slate-400",
                li { "Type a question directly, or use /ask to tag it explicitly." }
                li { "Use /configure then describe settings, e.g. \"316 ultra polished\"." }
                li { "Configuration requests update the selected part without a reply." }
            }
        }
    }
}

#[component]
fn ConfirmationDropdown(tag: IntentTag) -> Element {
    let text = match tag {
        IntentTag::Ask => "Ask mode armed. Your next message goes to the assistant.",
        IntentTag::Configure => {
            "Configure mode armed. Describe the settings to apply to the selected part."
        }
    };
    rsx! {
        div {
            class: "mb-2 rounded-lg border border-indigo-500/40 bg-indigo-500/10 px-3 py-2 text-xs text-indigo-200",
            "{text}"
        }
    }
}

/// Attachment stub. The file never leaves the picker; only its name is
/// echoed into the transcript.
#[component]
fn FileUploadButton() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        label {
            class: "cursor-pointer rounded-lg border border-slate-700 px-3 py-2 text-sm text-slate-400 hover:border-slate-500",
            title: "Attach a file",
            "📎"
            input {
                r#type: "file",
                class: "hidden",
                onchange: move |evt| {
                    if let Some(file) = evt.files().into_iter().next() {
                        let name = file.name();
                        state.with_mut(|st| {
                            st.push_assistant(ChatBody::Text(format!("File uploaded: {name}")));
                        });
                    }
                },
            }
        }
    }
}
