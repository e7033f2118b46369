//! Settings: two-factor authentication set-up plus privacy and accessibility information.

mod page;
mod two_factor;
mod view;

pub use page::{
    cancel_two_factor, get_settings_page, set_two_factor_method, toggle_two_factor,
    verify_two_factor,
};
pub use two_factor::TwoFactorSettings;
