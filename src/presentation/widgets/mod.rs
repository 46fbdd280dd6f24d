//! Reusable widgets.

mod input;
mod notification_popup;
mod option_list;

pub use input::TextInput;
pub use notification_popup::NotificationPopup;
pub use option_list::OptionList;
