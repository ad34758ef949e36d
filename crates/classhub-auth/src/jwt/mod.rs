//! JWT session tokens.
//!
//! Sessions are stateless: the only session state is the signed token held
//! by the client. There is no refresh flow and no server-side revocation;
//! logout is the client discarding its token.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
