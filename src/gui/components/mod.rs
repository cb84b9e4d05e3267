// src/gui/components/mod.rs
pub mod cards;
pub mod data_table;
pub mod export_bar;
pub mod header;
pub mod status_bar;
