use crate::cursor::Cursor;
use crate::error::DecodeResult;
use crate::protocol::name::unzip_domain;
use crate::types::RecordType;
use std::fmt;

/// Type-specific reading of a record's payload.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RecordData {
    /// Payload bytes as dotted decimals, `192.0.2.1` for a well-formed A record.
    Address(String),
    Text(String),
    Name(String),
    Raw(Vec<u8>),
}

impl RecordData {
    /// `payload` is exactly the declared payload; `cursor` sits at its first
    /// byte in the full message. Name-valued types decode through the cursor so
    /// pointers may reach outside the payload, and the cursor is put back
    /// afterwards.
    pub fn interpret(payload: &[u8], _type: RecordType, cursor: &mut Cursor) -> DecodeResult<Self> {
        Ok(match _type {
            RecordType::A => RecordData::Address(join_octets(payload)),
            RecordType::TXT | RecordType::SPF => {
                RecordData::Text(String::from_utf8_lossy(payload).into_owned())
            }
            RecordType::NS | RecordType::SOA | RecordType::CNAME | RecordType::PTR => {
                let start = cursor.get_current_index();
                RecordData::Name(cursor.tmp_at(start, unzip_domain)?)
            }
            _ => RecordData::Raw(payload.to_vec()),
        })
    }
}

fn join_octets(payload: &[u8]) -> String {
    payload.iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordData::Address(s) | RecordData::Name(s) => write!(f, "{}", s),
            RecordData::Text(s) => write!(f, "{:?}", s),
            RecordData::Raw(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}
