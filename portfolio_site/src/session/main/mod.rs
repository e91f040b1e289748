mod cookie;
mod session;
mod token;

pub use cookie::{delete_session_cookie, get_session_token, set_session_cookie};
pub use session::{end_session, prepare_logout_response, prepare_session_response, start_session};
pub use token::generate_session_token;
