//! Byte-level builders for synthetic `Cookies.binarycookies` files.
#![allow(dead_code)]

pub const RECORD_HEADER_LEN: usize = 56;

#[derive(Debug, Clone)]
pub struct TestRecord {
    pub domain: String,
    pub name: String,
    pub path: String,
    pub value: String,
    pub flags: u32,
    pub expiration: f64,
    pub creation: f64,
}

impl TestRecord {
    pub fn new(domain: &str, name: &str, path: &str, value: &str) -> Self {
        Self {
            domain: domain.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            value: value.to_string(),
            flags: 0,
            expiration: 0.0,
            creation: 0.0,
        }
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn times(mut self, expiration: f64, creation: f64) -> Self {
        self.expiration = expiration;
        self.creation = creation;
        self
    }

    /// Header followed by domain, name, path, value, each NUL-terminated.
    pub fn encode(&self) -> Vec<u8> {
        let mut body = Vec::new();
        let mut offsets = Vec::new();
        for s in [&self.domain, &self.name, &self.path, &self.value] {
            offsets.push((RECORD_HEADER_LEN + body.len()) as i32);
            body.extend_from_slice(s.as_bytes());
            body.push(0);
        }

        let mut data = Vec::new();
        data.extend_from_slice(&((RECORD_HEADER_LEN + body.len()) as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&self.flags.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        for offset in offsets {
            data.extend_from_slice(&offset.to_le_bytes());
        }
        data.extend_from_slice(&[0u8; 8]);
        data.extend_from_slice(&self.expiration.to_le_bytes());
        data.extend_from_slice(&self.creation.to_le_bytes());
        data.extend_from_slice(&body);
        data
    }
}

/// Page with marker `00 00 01 00`, record count, offsets, then the records.
pub fn encode_page(records: &[TestRecord]) -> Vec<u8> {
    let encoded: Vec<Vec<u8>> = records.iter().map(TestRecord::encode).collect();

    let mut data = vec![0x00, 0x00, 0x01, 0x00];
    data.extend_from_slice(&(encoded.len() as u32).to_le_bytes());
    let mut pos = 8 + 4 * encoded.len();
    for record in &encoded {
        data.extend_from_slice(&(pos as i32).to_le_bytes());
        pos += record.len();
    }
    for record in encoded {
        data.extend(record);
    }
    data
}

/// File with magic `cook`, big-endian page table, pages, and an 8-byte trailer.
pub fn encode_file(pages: &[Vec<u8>]) -> Vec<u8> {
    let mut data = b"cook".to_vec();
    data.extend_from_slice(&(pages.len() as u32).to_be_bytes());
    for page in pages {
        data.extend_from_slice(&(page.len() as u32).to_be_bytes());
    }
    for page in pages {
        data.extend_from_slice(page);
    }
    data.extend_from_slice(&[0x07, 0x17, 0x20, 0x05, 0x00, 0x00, 0x00, 0x4b]);
    data
}

/// Byte offset of page `index` within a file built by [`encode_file`].
pub fn page_offset(pages: &[Vec<u8>], index: usize) -> usize {
    8 + 4 * pages.len() + pages[..index].iter().map(Vec::len).sum::<usize>()
}
