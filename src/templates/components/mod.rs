pub mod car_card;
pub mod error;
pub mod filter_form;
pub mod results;

pub use car_card::car_card;
pub use error::html_error_response;
pub use filter_form::filter_form;
pub use results::results_section;
