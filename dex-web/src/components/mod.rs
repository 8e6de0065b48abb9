//! UI Components

pub mod display_left_time;
pub mod language_select;
pub mod main_layout;
pub mod menu_dropdown_icon;
pub mod overview_label_value;
pub mod temp_banner;

pub use display_left_time::DisplayLeftTime;
pub use language_select::LanguageSelect;
pub use main_layout::MainLayout;
pub use menu_dropdown_icon::MenuDropdownIcon;
pub use overview_label_value::OverviewLabelValue;
pub use temp_banner::TempBanner;
