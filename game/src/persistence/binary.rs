/// Sequential little-endian writer of area and save files.
#[derive(Default)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    /// Length prefixed UTF-8, longer strings are cut at `u16::MAX` bytes.
    pub fn write_string(&mut self, value: &str) {
        let mut length = value.len().min(u16::MAX as usize);
        while !value.is_char_boundary(length) {
            length -= 1;
        }
        self.write_u16(length as u16);
        self.buffer.extend_from_slice(&value.as_bytes()[..length]);
    }

    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryError {
    UnexpectedEnd { offset: usize, wanted: usize },
    InvalidString { offset: usize },
}

pub struct BinaryReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], BinaryError> {
        if self.remaining() < count {
            return Err(BinaryError::UnexpectedEnd {
                offset: self.offset,
                wanted: count,
            });
        }
        let bytes = &self.bytes[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], BinaryError> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, BinaryError> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, BinaryError> {
        self.read_array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, BinaryError> {
        self.read_array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, BinaryError> {
        self.read_u8().map(|value| value != 0)
    }

    pub fn read_string(&mut self) -> Result<String, BinaryError> {
        let length = self.read_u16()? as usize;
        let offset = self.offset;
        let bytes = self.read_bytes(length)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| BinaryError::InvalidString { offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_little_endian() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(0x01);
        writer.write_u16(0x0302);
        writer.write_u32(0x07060504);
        writer.write_bool(true);
        assert_eq!(writer.into_bytes(), vec![1, 2, 3, 4, 5, 6, 7, 1]);
    }

    #[test]
    fn test_read_back_mixed_values() {
        let mut writer = BinaryWriter::new();
        writer.write_string("Dungeon of Ünder");
        writer.write_u16(640);
        writer.write_bool(false);
        writer.write_string("");
        let bytes = writer.into_bytes();

        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read_string().unwrap(), "Dungeon of Ünder");
        assert_eq!(reader.offset(), 2 + "Dungeon of Ünder".len());
        assert_eq!(reader.read_u16().unwrap(), 640);
        assert!(!reader.read_bool().unwrap());
        assert_eq!(reader.read_string().unwrap(), "");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_truncated_input_reports_offset() {
        let bytes = [0x05, 0x00, b'a', b'b'];
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(
            reader.read_string(),
            Err(BinaryError::UnexpectedEnd {
                offset: 2,
                wanted: 5
            })
        );
        let mut reader = BinaryReader::new(&bytes[..1]);
        assert_eq!(
            reader.read_u16(),
            Err(BinaryError::UnexpectedEnd {
                offset: 0,
                wanted: 2
            })
        );
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let bytes = [0x02, 0x00, 0xff, 0xfe];
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(
            reader.read_string(),
            Err(BinaryError::InvalidString { offset: 2 })
        );
    }
}
