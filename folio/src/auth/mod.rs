//! Credential handling.
//!
//! There is no login flow: accounts only exist to own a profile. What this module does guarantee
//! is that account passwords are never stored in plaintext - see [`password`].

pub mod password;
