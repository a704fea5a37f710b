//! Numeric code <-> mnemonic tables for record types and classes.
//!
//! Known codes map onto named variants, anything else is kept as
//! `Unknown(code)` so a decode never loses information.

mod record_class;
mod record_type;

pub use record_class::RecordClass;
pub use record_type::RecordType;

use std::fmt;

/// A mnemonic that is neither in the table nor a generic `TYPEnnn`/`CLASSnnn`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnknownMnemonic(pub String);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown mnemonic: {}", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}

/// Accepts `"<prefix>nnn"` (RFC 3597 generic form) or a bare decimal code.
fn parse_generic(s: &str, prefix: &str) -> Option<u16> {
    let digits = match s.get(..prefix.len()) {
        Some(head) if s.len() > prefix.len() && head.eq_ignore_ascii_case(prefix) => &s[prefix.len()..],
        _ => s,
    };
    digits.parse().ok()
}

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident, $generic:expr, {
            $($variant:ident = $code:literal, $mnemonic:literal;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(clippy::upper_case_acronyms, non_camel_case_types)]
        pub enum $name {
            $($variant,)*
            Unknown(u16),
        }

        impl $name {
            /// The table mnemonic, `None` for unknown codes.
            pub fn mnemonic(&self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($mnemonic),)*
                    $name::Unknown(_) => None,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<u16> for $name {
            fn from(code: u16) -> Self {
                match code {
                    $($code => $name::$variant,)*
                    other => $name::Unknown(other),
                }
            }
        }

        impl From<$name> for u16 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $code,)*
                    $name::Unknown(code) => code,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::types::UnknownMnemonic;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let upper = s.to_ascii_uppercase();
                match upper.as_str() {
                    $($mnemonic => Ok($name::$variant),)*
                    _ => crate::types::parse_generic(&upper, $generic)
                        .map($name::from)
                        .ok_or_else(|| crate::types::UnknownMnemonic(s.to_string())),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match self.mnemonic() {
                    Some(mnemonic) => write!(f, "{}", mnemonic),
                    None => write!(f, "{}", u16::from(*self)),
                }
            }
        }
    };
}

pub(crate) use code_table;
