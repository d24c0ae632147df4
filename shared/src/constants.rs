pub const BALANCE_FLAG_KEY: &str = "mainPageBalance";
pub const BALANCE_RESET_VALUE: &str = "0.00";

// Transition delays in milliseconds
pub const PROMPT_EXIT_DELAY_MS: u32 = 300;
pub const SPIN_LEAD_IN_MS: u32 = 300;
pub const SPIN_DURATION_MS: u32 = 3000;
pub const CONFETTI_LEAD_MS: u32 = 500;
pub const CLOSE_DELAY_MS: u32 = 300;

pub const CONFETTI_PARTICLE_COUNT: usize = 50;
pub const CONFETTI_DURATION_MS: u32 = 3000;
pub const CONFETTI_SEED: u64 = 0x0070_0FF;

pub const FULL_TURN_DEGREES: f64 = 360.0;
