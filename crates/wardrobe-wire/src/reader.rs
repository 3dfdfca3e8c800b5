//! Little-endian byte reader bound to one wire layout

use wardrobe_core::DecodeError;

use crate::WireVersion;

#[derive(Debug, Clone)]
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    version: WireVersion,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8], version: WireVersion) -> Self {
        ByteReader {
            data,
            pos: 0,
            version,
        }
    }

    fn truncated(&self) -> DecodeError {
        DecodeError::Truncated {
            version: self.version.to_byte(),
            expected: self.version.encoded_len(),
            actual: self.data.len(),
        }
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let data: &'a [u8] = self.data;
        let end = self.pos.checked_add(len).ok_or_else(|| self.truncated())?;
        let bytes = data.get(self.pos..end).ok_or_else(|| self.truncated())?;
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }
}
