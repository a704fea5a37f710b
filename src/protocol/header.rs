use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use std::convert::TryFrom;
use std::fmt;

pub const HEADER_SIZE: usize = 12;

const FLAG_QR: u8 = 0b1000_0000;
const OPCODE_MASK: u8 = 0b0111_1000;
const FLAG_AA: u8 = 0b0000_0100;
const FLAG_TC: u8 = 0b0000_0010;
const FLAG_RD: u8 = 0b0000_0001;
const FLAG_RA: u8 = 0b1000_0000;
const RCODE_MASK: u8 = 0b0000_1111;

/// The fixed 12-byte message header with its flag bits unpacked. The three
/// reserved bits of the second flags byte are dropped.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    pub id: u16,
    pub is_query: bool,
    pub opcode: u8,
    pub authoritative_answer: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl<'a, 'b> TryFrom<&'b mut Cursor<'a>> for Header {
    type Error = DecodeError;

    fn try_from(cursor: &'b mut Cursor<'a>) -> DecodeResult<Self> {
        let id = cursor.take_u16()?;
        let [high, low] = cursor.take_bytes::<2>()?;
        Ok(Header {
            id,
            is_query: high & FLAG_QR == 0,
            opcode: (high & OPCODE_MASK) >> 3,
            authoritative_answer: high & FLAG_AA != 0,
            truncated: high & FLAG_TC != 0,
            recursion_desired: high & FLAG_RD != 0,
            recursion_available: low & FLAG_RA != 0,
            response_code: low & RCODE_MASK,
            question_count: cursor.take_u16()?,
            answer_count: cursor.take_u16()?,
            authority_count: cursor.take_u16()?,
            additional_count: cursor.take_u16()?,
        })
    }
}

impl Header {
    pub fn is_response(&self) -> bool {
        !self.is_query
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            self.opcode, self.response_code, self.id
        )?;
        let flags: Vec<&str> = [
            (self.is_response(), "qr"),
            (self.authoritative_answer, "aa"),
            (self.truncated, "tc"),
            (self.recursion_desired, "rd"),
            (self.recursion_available, "ra"),
        ]
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| *name)
        .collect();
        write!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            flags.join(" "),
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count
        )
    }
}
