use time::OffsetDateTime;

use super::{
    assistant::material_preset,
    catalog::sample_parts,
    entities::{
        material_label, tolerance_label, BulletPrefs, ChatBody, ChatEntry, ChatRole, ConfigPatch,
        IntentTag, Part, PartId,
    },
};
use crate::util::generate_id;

/// Whole-application state. Owned by a single signal at the app root; UI
/// event handlers go through these methods instead of poking fields, so
/// every transition lives in one reviewable place.
#[derive(Clone, Debug)]
pub struct AppState {
    pub parts: Vec<Part>,
    pub selected_part: Option<PartId>,
    pub conversation: Vec<ChatEntry>,
    /// Active intent pill; consumed by the next submit.
    pub pending_tag: Option<IntentTag>,
    pub bullet_prefs: BulletPrefs,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            parts: sample_parts(),
            selected_part: None,
            conversation: Vec::new(),
            pending_tag: None,
            bullet_prefs: BulletPrefs::default(),
        }
    }
}

impl AppState {
    /// Replaces the current selection wholesale. Edits made to the
    /// previously selected part stay on its record in `parts`.
    pub fn select_part(&mut self, id: PartId) {
        if self.parts.iter().any(|part| part.id == id) {
            self.selected_part = Some(id);
        }
    }

    pub fn current_part(&self) -> Option<&Part> {
        let id = self.selected_part?;
        self.parts.iter().find(|part| part.id == id)
    }

    pub fn current_part_mut(&mut self) -> Option<&mut Part> {
        let id = self.selected_part?;
        self.parts.iter_mut().find(|part| part.id == id)
    }

    pub fn set_material(&mut self, key: impl Into<String>) {
        let key = key.into();
        if let Some(part) = self.current_part_mut() {
            part.material = key;
        }
        self.refresh_descriptive_config();
    }

    pub fn set_tolerance(&mut self, key: impl Into<String>) {
        let key = key.into();
        if let Some(part) = self.current_part_mut() {
            part.tolerance = key;
        }
        self.refresh_descriptive_config();
    }

    pub fn set_surface(&mut self, key: impl Into<String>) {
        if let Some(part) = self.current_part_mut() {
            part.surface = key.into();
        }
    }

    /// Raw form input; anything that does not parse to a positive integer
    /// becomes quantity 1.
    pub fn set_quantity_from_input(&mut self, raw: &str) {
        let quantity = raw.trim().parse::<u32>().unwrap_or(1).max(1);
        if let Some(part) = self.current_part_mut() {
            part.quantity = quantity;
        }
    }

    /// Applies a configuration patch onto the current part. Unmatched
    /// fields are left untouched; with no part selected this is a no-op.
    pub fn apply_patch(&mut self, patch: &ConfigPatch) {
        if let Some(part) = self.current_part_mut() {
            if let Some(material) = patch.material {
                part.material = material.to_string();
            }
            if let Some(tolerance) = patch.tolerance {
                part.tolerance = tolerance.to_string();
            }
            if let Some(surface) = patch.surface {
                part.surface = surface.to_string();
            }
        }
        self.refresh_descriptive_config();
    }

    /// Overwrites the current part with a canned preset triple and returns
    /// it so the caller can emit the confirmation message.
    pub fn apply_preset(&mut self, code: &str) -> (&'static str, &'static str, &'static str) {
        let (material, tolerance, surface) = material_preset(code);
        if let Some(part) = self.current_part_mut() {
            part.material = material.to_string();
            part.tolerance = tolerance.to_string();
            part.surface = surface.to_string();
        }
        self.refresh_descriptive_config();
        (material, tolerance, surface)
    }

    fn refresh_descriptive_config(&mut self) {
        if let Some(part) = self.current_part_mut() {
            part.descriptive_config = format!(
                "{}, {}",
                material_label(&part.material),
                tolerance_label(&part.tolerance)
            );
        }
    }

    pub fn set_pending_tag(&mut self, tag: IntentTag) {
        self.pending_tag = Some(tag);
    }

    pub fn clear_pending_tag(&mut self) {
        self.pending_tag = None;
    }

    pub fn take_pending_tag(&mut self) -> Option<IntentTag> {
        self.pending_tag.take()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push_entry(ChatRole::User, ChatBody::Text(text.into()));
    }

    pub fn push_assistant(&mut self, body: ChatBody) {
        self.push_entry(ChatRole::Assistant, body);
    }

    /// Appends a "thinking" placeholder and hands back its id so the
    /// deferred reply can find it later.
    pub fn push_thinking(&mut self) -> String {
        self.push_entry(ChatRole::Assistant, ChatBody::Thinking)
    }

    /// Resolves a pending placeholder in place. Silently ignores ids that
    /// are gone (e.g. the transcript was cleared while a timer was live),
    /// keeping overlapping replies independent of each other.
    pub fn resolve_thinking(&mut self, entry_id: &str, body: ChatBody) {
        if let Some(entry) = self
            .conversation
            .iter_mut()
            .find(|entry| entry.id == entry_id && entry.body == ChatBody::Thinking)
        {
            entry.body = body;
            entry.timestamp = now();
        }
    }

    pub fn clear_conversation(&mut self) {
        self.conversation.clear();
        self.pending_tag = None;
    }

    fn push_entry(&mut self, role: ChatRole, body: ChatBody) -> String {
        let id = generate_id("chat");
        self.conversation.push(ChatEntry {
            id: id.clone(),
            role,
            body,
            timestamp: now(),
        });
        id
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::extract_config_patch;
    use crate::domain::entities::ResponseTopic;
    use pretty_assertions::assert_eq;

    #[test]
    fn selection_replaces_wholesale() {
        let mut state = AppState::default();
        state.select_part(1);
        assert_eq!(state.current_part().map(|p| p.id), Some(1));
        state.select_part(2);
        assert_eq!(state.current_part().map(|p| p.id), Some(2));
        // Unknown ids leave the selection alone.
        state.select_part(999);
        assert_eq!(state.current_part().map(|p| p.id), Some(2));
    }

    #[test]
    fn edits_survive_reselection_round_trip() {
        let mut state = AppState::default();
        state.select_part(1);
        state.set_material("titanium-grade5");
        state.set_quantity_from_input("42");

        state.select_part(2);
        state.set_material("plastic-abs");

        state.select_part(1);
        let part = state.current_part().unwrap();
        assert_eq!(part.material, "titanium-grade5");
        assert_eq!(part.quantity, 42);
        assert_eq!(part.descriptive_config, "Titanium Grade 5, Standard (±0.1mm)");
    }

    #[test]
    fn bad_quantity_input_defaults_to_one() {
        let mut state = AppState::default();
        state.select_part(1);
        state.set_quantity_from_input("twelve");
        assert_eq!(state.current_part().unwrap().quantity, 1);
        state.set_quantity_from_input("0");
        assert_eq!(state.current_part().unwrap().quantity, 1);
        state.set_quantity_from_input("-4");
        assert_eq!(state.current_part().unwrap().quantity, 1);
        state.set_quantity_from_input(" 7 ");
        assert_eq!(state.current_part().unwrap().quantity, 7);
    }

    #[test]
    fn configure_text_patches_only_matched_fields() {
        let mut state = AppState::default();
        state.select_part(2);
        let before_quantity = state.current_part().unwrap().quantity;

        state.apply_patch(&extract_config_patch("316 ultra polished"));

        let part = state.current_part().unwrap();
        assert_eq!(part.material, "steel-316");
        assert_eq!(part.tolerance, "ultra");
        assert_eq!(part.surface, "polished-standard");
        assert_eq!(part.quantity, before_quantity);
        // Silent handler: nothing lands in the transcript.
        assert!(state.conversation.is_empty());
    }

    #[test]
    fn patch_without_selection_is_a_no_op() {
        let mut state = AppState::default();
        let before = state.parts.clone();
        state.apply_patch(&extract_config_patch("titanium ultra anodized"));
        assert_eq!(state.parts, before);
    }

    #[test]
    fn preset_overwrites_triple_and_reports_it() {
        let mut state = AppState::default();
        state.select_part(3);
        let (material, tolerance, surface) = state.apply_preset("304");
        assert_eq!((material, tolerance, surface), ("steel-304", "standard", "bead-blasted"));
        let part = state.current_part().unwrap();
        assert_eq!(part.material, "steel-304");
        assert_eq!(part.tolerance, "standard");
        assert_eq!(part.surface, "bead-blasted");
    }

    #[test]
    fn transcript_is_append_only_and_ordered() {
        let mut state = AppState::default();
        state.push_user("first");
        let pending = state.push_thinking();
        state.push_user("second");
        assert_eq!(state.conversation.len(), 3);
        assert_eq!(state.conversation[1].id, pending);

        state.resolve_thinking(&pending, ChatBody::Topic(ResponseTopic::Cost));
        assert_eq!(state.conversation[1].body, ChatBody::Topic(ResponseTopic::Cost));
        // Order unchanged by resolution.
        assert_eq!(state.conversation[0].body, ChatBody::Text("first".into()));
        assert_eq!(state.conversation[2].body, ChatBody::Text("second".into()));
    }

    #[test]
    fn overlapping_replies_resolve_their_own_placeholders() {
        let mut state = AppState::default();
        let first = state.push_thinking();
        let second = state.push_thinking();

        // Second timer fires first; the first placeholder must stay pending.
        state.resolve_thinking(&second, ChatBody::Topic(ResponseTopic::Material));
        assert_eq!(state.conversation[0].body, ChatBody::Thinking);
        assert_eq!(
            state.conversation[1].body,
            ChatBody::Topic(ResponseTopic::Material)
        );

        state.resolve_thinking(&first, ChatBody::Topic(ResponseTopic::Cost));
        assert_eq!(state.conversation[0].body, ChatBody::Topic(ResponseTopic::Cost));
    }

    #[test]
    fn resolving_after_clear_is_harmless() {
        let mut state = AppState::default();
        let pending = state.push_thinking();
        state.clear_conversation();
        state.resolve_thinking(&pending, ChatBody::Topic(ResponseTopic::Process));
        assert!(state.conversation.is_empty());
    }
}
