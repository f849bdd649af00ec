//! Weather match - country → city → weather → "same weather elsewhere"
//!
//! Widgets publish typed events, the cascade wires them together and polls
//! for a matching city. The terminal UI only renders snapshots.

pub mod action;
pub mod api;
pub mod cascade;
pub mod components;
pub mod config;
pub mod countries;
pub mod error;
pub mod event;
pub mod icon;
pub mod logging;
pub mod model;
pub mod tasks;
pub mod view;
pub mod widgets;
