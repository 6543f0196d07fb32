pub mod impl_capture_folder;
pub mod impl_fake;
pub mod interface;
