//! Application-level configuration constants.

// Form behavior
pub const SPLIT_MIN: u32 = 1;
pub const SPLIT_MAX: u32 = 100;
pub const SLIDER_STEPS: u32 = 6;

// UI labels
pub const APP_TITLE: &str = "Tip Calculator";
pub const HEADER_LABEL: &str = "Total Per Person";
pub const BILL_PLACEHOLDER: &str = "Enter Bill";
pub const SPLIT_LABEL: &str = "Split";
pub const TIP_LABEL: &str = "Tip";
