//! Rendering buffer

use crate::error::{Error, Result};

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), 4 bytes per pixel.
/// Rows start every `stride` bytes, which may be larger than the
/// `width * 4` bytes of pixel data in a row.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per row
    pub stride: usize,
}

/// Bytes per pixel
pub const BPP: usize = 4;

impl RenderingBuffer {
    /// Create a new buffer of width and height with tightly packed rows
    ///
    /// Data for the Image is allocated and zeroed (transparent)
    pub fn new(width: usize, height: usize) -> Self {
        RenderingBuffer {
            width, height, stride: width * BPP,
            data: vec![0u8; width * height * BPP],
        }
    }
    /// Wrap existing pixel data
    ///
    /// Fails if the dimensions are empty, the stride cannot hold a row,
    /// or `data` is too short for `height` rows.
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBounds { width, height });
        }
        if stride < width * BPP {
            return Err(Error::InvalidStride { stride, min: width * BPP });
        }
        let required = stride * (height - 1) + width * BPP;
        if data.len() < required {
            return Err(Error::BufferTooSmall { len: data.len(), required });
        }
        Ok(RenderingBuffer { data, width, height, stride })
    }
    /// Release the underlying pixel data
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Byte offset of pixel (`x`,`y`)
    pub fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * BPP
    }
    /// Clear an image to transparent
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        debug_assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        debug_assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &self.data[i .. i + BPP]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        debug_assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        debug_assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index.0, index.1);
        &mut self.data[i .. i + BPP]
    }
}
