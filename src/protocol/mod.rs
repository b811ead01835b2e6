//! Host protocol handling.
//!
//! Decodes the JSON game-state messages delivered once per turn and encodes
//! the chosen move.

pub mod message;

pub use message::{format_response, parse_message, Message, ProtocolError, Response};
