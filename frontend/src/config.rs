use web_sys::window;
use shared::presets::{preset_by_name, WheelPreset, GOLD_WHEEL};

pub const PRICING_SECTION_ID: &str = "pricing";
pub const BALANCE_RESET_EVENT: &str = "balanceReset";

/// Wheel face for this page load. `?wheel=spectrum` swaps in the coloured
/// wheel; anything else falls back to the gold one.
pub fn active_preset() -> &'static WheelPreset {
    window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| {
            search
                .trim_start_matches('?')
                .split('&')
                .find_map(|pair| pair.strip_prefix("wheel=").map(str::to_string))
        })
        .and_then(|name| preset_by_name(&name))
        .unwrap_or(&GOLD_WHEEL)
}

pub fn pricing_selector() -> String {
    format!("#{}", PRICING_SECTION_ID)
}
