use crate::session::config::SESSION_TOKEN_BYTES;
use crate::session::errors::SessionError;
use crate::session::types::SessionToken;
use crate::utils::gen_random_string;

/// Generate a fresh session token.
///
/// The token is [`SESSION_TOKEN_BYTES`] bytes from the system CSPRNG,
/// base64url encoded without padding (24 characters). A failing random
/// source is reported as an error rather than replaced with a weaker one.
pub fn generate_session_token() -> Result<SessionToken, SessionError> {
    let token = gen_random_string(SESSION_TOKEN_BYTES)?;
    Ok(SessionToken::new(token))
}
