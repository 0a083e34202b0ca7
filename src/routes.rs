mod health_check;
mod helpers;
mod send_email;

pub use health_check::health_check;
pub use helpers::{error_chain_fmt, prepare_html_template};
pub use send_email::*;
