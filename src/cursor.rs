use crate::error::{DecodeError, DecodeResult};

/// A read position over an immutable packet. Copies are independent views of
/// the same bytes, which is what compression pointers need.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    current: usize,
}

impl<'a> From<&'a [u8]> for Cursor<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Cursor {
            buf,
            current: 0,
        }
    }
}

impl<'a> Cursor<'a> {
    pub fn get_current_index(&self) -> usize {
        self.current
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.current
    }

    /// Absolute reposition, `index == len` included.
    pub fn at(&mut self, index: usize) -> DecodeResult<()> {
        if index > self.buf.len() {
            return Err(DecodeError::InvalidOffset {
                offset: index as isize,
                len: self.buf.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// A fresh view of the same bytes positioned at `index`. `self` is left alone.
    pub fn view_at(&self, index: usize) -> DecodeResult<Cursor<'a>> {
        let mut view = Cursor::from(self.buf);
        view.at(index)?;
        Ok(view)
    }

    /// Relative move, negative steps allowed.
    pub fn move_to(&mut self, step: isize) -> DecodeResult<()> {
        let target = self.current as isize + step;
        if target < 0 || target as usize > self.buf.len() {
            return Err(DecodeError::InvalidOffset {
                offset: target,
                len: self.buf.len(),
            });
        }
        self.current = target as usize;
        Ok(())
    }

    /// Runs `func` with the cursor moved to `index`, then puts it back where it
    /// was whatever `func` consumed.
    pub fn tmp_at<T, F>(&mut self, index: usize, func: F) -> DecodeResult<T>
    where
        F: FnOnce(&mut Self) -> DecodeResult<T>,
    {
        let current_index_saved = self.get_current_index();
        self.at(index)?;
        let result = func(self);
        self.current = current_index_saved;
        result
    }

    pub fn take(&mut self) -> DecodeResult<u8> {
        Ok(self.take_bytes::<1>()?[0])
    }

    pub fn take_u16(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_be_bytes(self.take_bytes()?))
    }

    pub fn take_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_be_bytes(self.take_bytes()?))
    }

    pub fn take_bytes<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.take_slice(N)?);
        Ok(bytes)
    }

    pub fn take_slice(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        let result = self.peek_slice(len)?;
        self.current += len;
        Ok(result)
    }

    /// Same bounds as `take_slice` without advancing.
    pub fn peek_slice(&self, len: usize) -> DecodeResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(DecodeError::TruncatedInput {
                offset: self.current,
                needed: len,
                remaining: self.remaining(),
            });
        }
        Ok(&self.buf[self.current..self.current + len])
    }
}
