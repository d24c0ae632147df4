pub mod use_balance;
pub mod use_custom_css;

pub use use_balance::*;
pub use use_custom_css::*;
