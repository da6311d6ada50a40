pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod require_role;
pub(crate) mod toast;
pub(crate) mod user_dropdown;
