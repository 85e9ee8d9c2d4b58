pub mod app_reducer;
pub mod header_reducer;
pub mod particles_reducer;
pub mod scroll_reducer;
pub mod splash_reducer;
pub mod timeline_reducer;
