//! Builders for synthetic MapBlock payloads.

#![allow(dead_code)]

pub const NODE_COUNT: usize = 4096;

/// Builds a decompressed payload field by field, defaulting to a valid disk-format block.
#[derive(Clone)]
pub struct PayloadBuilder {
    pub flags: u8,
    pub lighting_complete: u16,
    pub timestamp: Option<u32>,
    pub mapping_version: u8,
    pub mappings: Vec<(u16, Vec<u8>)>,
    pub count_override: Option<u16>,
    pub content_width: u8,
    pub params_width: u8,
    pub nodes: Vec<(u16, u8, u8)>,
    pub trailing: Vec<u8>,
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self {
            flags: 0,
            lighting_complete: 0,
            timestamp: Some(0),
            mapping_version: 0,
            mappings: Vec::new(),
            count_override: None,
            content_width: 2,
            params_width: 2,
            nodes: vec![(0, 0, 0); NODE_COUNT],
            trailing: Vec::new(),
        }
    }
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestamp(mut self, timestamp: Option<u32>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn mapping(mut self, id: u16, name: &str) -> Self {
        self.mappings.push((id, name.as_bytes().to_vec()));
        self
    }

    pub fn raw_mapping(mut self, id: u16, name: &[u8]) -> Self {
        self.mappings.push((id, name.to_vec()));
        self
    }

    pub fn widths(mut self, content_width: u8, params_width: u8) -> Self {
        self.content_width = content_width;
        self.params_width = params_width;
        self
    }

    pub fn fill(mut self, content_id: u16, param1: u8, param2: u8) -> Self {
        self.nodes = vec![(content_id, param1, param2); NODE_COUNT];
        self
    }

    pub fn set_node(mut self, index: usize, content_id: u16, param1: u8, param2: u8) -> Self {
        self.nodes[index] = (content_id, param1, param2);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(self.flags);
        out.extend_from_slice(&self.lighting_complete.to_be_bytes());
        if let Some(timestamp) = self.timestamp {
            out.extend_from_slice(&timestamp.to_be_bytes());
        }
        out.extend_from_slice(&self.mapping_section());
        out.push(self.content_width);
        out.push(self.params_width);
        for &(content_id, param1, param2) in &self.nodes {
            if self.content_width == 1 {
                out.push(content_id as u8);
            } else {
                out.extend_from_slice(&content_id.to_be_bytes());
            }
            out.push(param1);
            out.push(param2);
        }
        out.extend_from_slice(&self.trailing);
        out
    }

    /// Just the header bytes.
    pub fn header_section(&self) -> Vec<u8> {
        let mut out = vec![self.flags];
        out.extend_from_slice(&self.lighting_complete.to_be_bytes());
        if let Some(timestamp) = self.timestamp {
            out.extend_from_slice(&timestamp.to_be_bytes());
        }
        out
    }

    pub fn mapping_section(&self) -> Vec<u8> {
        let mut out = vec![self.mapping_version];
        let count = self.count_override.unwrap_or(self.mappings.len() as u16);
        out.extend_from_slice(&count.to_be_bytes());
        for (id, name) in &self.mappings {
            out.extend_from_slice(&id.to_be_bytes());
            out.extend_from_slice(&(name.len() as u16).to_be_bytes());
            out.extend_from_slice(name);
        }
        out
    }
}

/// Prefixes a zstd-compressed payload with a version byte.
pub fn compress(version: u8, payload: &[u8]) -> Vec<u8> {
    let mut raw = vec![version];
    raw.extend(zstd::encode_all(payload, 3).expect("zstd compression"));
    raw
}

pub fn index(x: usize, y: usize, z: usize) -> usize {
    z * 256 + y * 16 + x
}
