mod data;

pub use data::RecordData;

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::protocol::name::unzip_domain;
use crate::types::{RecordClass, RecordType};
use std::convert::TryFrom;
use std::fmt;

/// An answer, authority or additional entry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResourceRecord {
    pub name: String,
    pub _type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl<'a, 'b> TryFrom<&'b mut Cursor<'a>> for ResourceRecord {
    type Error = DecodeError;

    /// Always leaves the cursor exactly `data_len` bytes past the length field,
    /// whatever the payload interpretation consumed.
    fn try_from(cursor: &'b mut Cursor<'a>) -> DecodeResult<Self> {
        let name = unzip_domain(cursor)?;
        let _type = RecordType::from(cursor.take_u16()?);
        let class = RecordClass::from(cursor.take_u16()?);
        let ttl = cursor.take_u32()?;
        let data_len = cursor.take_u16()? as usize;
        let payload = cursor.peek_slice(data_len)?;
        let data = RecordData::interpret(payload, _type, cursor)?;
        cursor.move_to(data_len as isize)?;
        trace!("record {} {} {} ttl={} len={}", name, class, _type, ttl, data_len);
        Ok(ResourceRecord {
            name,
            _type,
            class,
            ttl,
            data,
        })
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}\t{}", self.name, self.ttl, self.class, self._type, self.data)
    }
}
