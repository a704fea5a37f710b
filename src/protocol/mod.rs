mod header;
mod name;
mod question;
mod resource;

pub use header::{Header, HEADER_SIZE};
pub use name::unzip_domain;
pub use question::Question;
pub use resource::{RecordData, ResourceRecord};

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use std::cmp::min;
use std::convert::TryFrom;
use std::fmt;

/// A fully decoded message. Owns all of its data; nothing borrows from the
/// input once decoding returns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

/// Decodes `bytes` as one message: the header, then as many questions,
/// answers, authority and additional records as the header counts say.
pub fn decode(bytes: &[u8]) -> DecodeResult<Message> {
    Message::try_from(bytes)
}

impl TryFrom<&[u8]> for Message {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> DecodeResult<Self> {
        let mut cursor = Cursor::from(bytes);
        let header = Header::try_from(&mut cursor)?;
        let questions = read_section(&mut cursor, header.question_count)?;
        let answers = read_section(&mut cursor, header.answer_count)?;
        let authorities = read_section(&mut cursor, header.authority_count)?;
        let additionals = read_section(&mut cursor, header.additional_count)?;
        debug!(
            "decoded message id={} questions={} answers={} authorities={} additionals={} ({} of {} bytes)",
            header.id,
            questions.len(),
            answers.len(),
            authorities.len(),
            additionals.len(),
            cursor.get_current_index(),
            bytes.len()
        );
        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

fn read_section<'a, T>(cursor: &mut Cursor<'a>, count: u16) -> DecodeResult<Vec<T>>
where
    T: for<'b> TryFrom<&'b mut Cursor<'a>, Error = DecodeError>,
{
    // every entry takes at least one byte, so the input bounds the allocation
    let mut entries = Vec::with_capacity(min(count as usize, cursor.remaining()));
    for _ in 0..count {
        entries.push(T::try_from(&mut *cursor)?);
    }
    Ok(entries)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.header)?;
        if !self.questions.is_empty() {
            write!(f, "\n\n;; QUESTION SECTION:")?;
            for question in &self.questions {
                write!(f, "\n{}", question)?;
            }
        }
        let sections = [
            ("ANSWER", &self.answers),
            ("AUTHORITY", &self.authorities),
            ("ADDITIONAL", &self.additionals),
        ];
        for (title, records) in sections.iter() {
            if records.is_empty() {
                continue;
            }
            write!(f, "\n\n;; {} SECTION:", title)?;
            for record in records.iter() {
                write!(f, "\n{}", record)?;
            }
        }
        Ok(())
    }
}
