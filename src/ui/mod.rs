//! UI module - reusable widgets used by the app views

pub mod components;
