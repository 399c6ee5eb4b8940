mod engine;
mod engine_config;
mod engine_core;
mod field_controller;
mod frame_builder;
mod hover_controller;
mod keyboard_controller;
mod navigation_controller;
mod open_close_controller;
mod preset_controller;

pub use engine::CalendarEngine;
pub use engine_config::{CalendarEngineConfig, PresetSource};
