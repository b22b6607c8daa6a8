pub mod errors;
pub mod html;

pub use errors::ResultResp;

pub use html::{css_response, html_response, js_response, text_response};
