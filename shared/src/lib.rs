pub mod constants;
pub mod confetti;
pub mod driver;
pub mod flag_store;
pub mod presets;
pub mod sequence;
pub mod stage_timer;
pub mod visibility;
pub mod wheel_geometry;
