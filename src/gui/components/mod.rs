// src/gui/components/mod.rs
pub mod cert_list;
pub mod filters_panel;
pub mod search_bar;
