//! Decoder for DNS wire-format messages (RFC 1035 section 4).
//!
//! ```
//! let bytes = [0x12, 0x34, 0x01, 0x00, 0, 0, 0, 0, 0, 0, 0, 0];
//! let message = dnsdecode::decode(&bytes).unwrap();
//! assert_eq!(0x1234, message.header.id);
//! assert!(message.header.recursion_desired);
//! ```

#[macro_use]
extern crate log;

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod protocol;
pub mod system;
pub mod types;

pub use cursor::Cursor;
pub use error::{DecodeError, DecodeResult};
pub use protocol::{decode, Header, Message, Question, RecordData, ResourceRecord};
pub use types::{RecordClass, RecordType};
