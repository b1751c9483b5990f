use crate::persistence::{BinaryError, BinaryReader, BinaryWriter};
use crate::AreaId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FileType {
    Area = 0x01,
    TempArea = 0x02,
}

impl FileType {
    pub fn from_tag(tag: u8) -> Option<FileType> {
        match tag {
            0x01 => Some(FileType::Area),
            0x02 => Some(FileType::TempArea),
            _ => None,
        }
    }
}

/// Five leading bytes shared by base and temp area files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub tag: u8,
    pub version: [u8; 2],
    pub area: AreaId,
}

impl FileHeader {
    pub fn new(file_type: FileType, version: [u8; 2], area: AreaId) -> Self {
        Self {
            tag: file_type as u8,
            version,
            area,
        }
    }

    pub fn file_type(&self) -> Option<FileType> {
        FileType::from_tag(self.tag)
    }

    pub fn write(&self, writer: &mut BinaryWriter) {
        writer.write_u8(self.tag);
        writer.write_u8(self.version[0]);
        writer.write_u8(self.version[1]);
        writer.write_u16(self.area);
    }

    pub fn read(reader: &mut BinaryReader) -> Result<FileHeader, BinaryError> {
        Ok(FileHeader {
            tag: reader.read_u8()?,
            version: [reader.read_u8()?, reader.read_u8()?],
            area: reader.read_u16()?,
        })
    }

    /// Describes why the header does not belong to the expected file.
    pub fn mismatch(&self, file_type: FileType, area: AreaId) -> Option<String> {
        if self.file_type() != Some(file_type) {
            return Some(format!(
                "file type tag {:#04x}, expected {:?}",
                self.tag, file_type
            ));
        }
        if self.area != area {
            return Some(format!("area id {}, expected {}", self.area, area));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let mut writer = BinaryWriter::new();
        FileHeader::new(FileType::TempArea, [1, 3], 0x0102).write(&mut writer);
        let bytes = writer.into_bytes();
        assert_eq!(bytes, vec![0x02, 1, 3, 0x02, 0x01]);
        let header = FileHeader::read(&mut BinaryReader::new(&bytes)).unwrap();
        assert_eq!(header.file_type(), Some(FileType::TempArea));
        assert_eq!(header.mismatch(FileType::TempArea, 0x0102), None);
        assert!(header.mismatch(FileType::Area, 0x0102).is_some());
        assert!(header.mismatch(FileType::TempArea, 7).is_some());
    }
}
