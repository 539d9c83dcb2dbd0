pub mod gauge_bar;
pub mod help_modal;
pub mod sidebar;
pub mod status_bar;
