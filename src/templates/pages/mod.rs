pub mod home;

pub use home::{home_page, search_app};
