pub mod assistant_reply;
pub mod chat_panel;
pub mod config_form;
pub mod part_list;
pub mod price_summary;
pub mod toast;
pub mod viewer_panel;
