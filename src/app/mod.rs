//! Core application logic: navigation, state, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod nav;
pub mod state;
pub mod timer;
