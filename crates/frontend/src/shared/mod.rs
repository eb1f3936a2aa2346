pub mod components;
pub mod format;
pub mod icons;
pub mod toast;
