//! Credential handling for outgoing requests.

pub mod token;

pub use token::{
    FileTokenStore, MemoryTokenStore, NoToken, StaticToken, TokenError, TokenProvider, TOKEN_KEY,
};
