use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{RngCore, rngs::OsRng};

const SESSION_TOKEN_BYTES: usize = 32;

/// Generate an opaque session token from the OS random source.
///
/// # Errors
/// Returns an error if the OS random source is unavailable.
pub fn generate_session_token() -> Result<String, rand::Error> {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}
