//! HTML template rendering handlers.

mod new_url;
mod short_link;

pub use new_url::{new_url_form_handler, new_url_submit_handler};
pub use short_link::short_link_handler;
