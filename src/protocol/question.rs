use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::protocol::name::unzip_domain;
use crate::types::{RecordClass, RecordType};
use std::convert::TryFrom;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Question {
    pub name: String,
    pub _type: RecordType,
    pub class: RecordClass,
}

impl<'a, 'b> TryFrom<&'b mut Cursor<'a>> for Question {
    type Error = DecodeError;

    fn try_from(cursor: &'b mut Cursor<'a>) -> DecodeResult<Self> {
        let name = unzip_domain(cursor)?;
        let _type = RecordType::from(cursor.take_u16()?);
        let class = RecordClass::from(cursor.take_u16()?);
        Ok(Question {
            name,
            _type,
            class,
        })
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, ";{}\t\t{}\t{}", self.name, self.class, self._type)
    }
}
