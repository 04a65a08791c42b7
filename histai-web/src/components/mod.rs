pub mod footer;
pub mod header;
pub mod image_modal;
pub mod link_button;
