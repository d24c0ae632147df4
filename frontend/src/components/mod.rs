pub mod discount_popup;

pub use discount_popup::DiscountPopup;
