//! Pixel Format

use crate::buffer::{RenderingBuffer, BPP};
use crate::color::*;
use crate::error::Result;

use crate::Color;
use crate::Order;
use crate::Pixel;
use crate::PixelData;
use crate::Source;

use std::marker::PhantomData;

/// Pixel Format Wrapper around raw pixel component data
///
/// `T` is the channel [Order] of the data, [Rgba8] or [Bgra8]
///
/// [Order]: ../trait.Order.html
/// [Rgba8]: ../color/struct.Rgba8.html
/// [Bgra8]: ../color/struct.Bgra8.html
#[derive(Debug,Clone,PartialEq)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T: Order> Pixfmt<T> {
    /// Create new Pixel Format of width * height
    ///
    /// Allocates memory of width * height * 4, all pixels transparent
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create pixfmt with 0 width or height");
        }
        Self { rbuf: RenderingBuffer::new(width, height),
               phantom: PhantomData
        }
    }
    /// Use existing pixel data with rows every `stride` bytes
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize, stride: usize) -> Result<Self> {
        let rbuf = RenderingBuffer::from_raw(data, width, height, stride)?;
        Ok(Self { rbuf, phantom: PhantomData })
    }
    /// Release the pixel data
    pub fn into_raw(self) -> Vec<u8> {
        self.rbuf.into_raw()
    }
    /// Size of Rendering Buffer in bytes
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.rbuf.stride
    }
    /// Clear the Image
    ///
    /// All color components are set to 0, including `alpha`
    ///
    ///     use aggspan::{Source,Pixel,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(2,2);
    ///     pix.set((1,1), Rgba8::white());
    ///     pix.clear();
    ///     assert_eq!(pix.get((1,1)), Rgba8::transparent());
    ///
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Byte offset of pixel (`x`,`y`); `y * stride + x * 4`
    pub fn offset(&self, x: usize, y: usize) -> usize {
        self.rbuf.offset(x, y)
    }
    /// Read pixel at byte offset `i`
    pub fn read_at(&self, i: usize) -> Rgba8 {
        T::read(&self.rbuf.data[i .. i + BPP])
    }
    /// Write color `c` at byte offset `i`
    pub fn write_at(&mut self, i: usize, c: Rgba8) {
        T::write(&mut self.rbuf.data[i .. i + BPP], c)
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use aggspan::{Source,Pixfmt,Rgba8,Bgra8};
    ///
    ///     let mut pix = Pixfmt::<Bgra8>::new(1,2);
    ///     let red = Rgba8::new(255,0,0,255);
    ///     pix.copy_pixel(0,1, red);
    ///     assert_eq!(pix.get((0,0)), Rgba8::transparent());
    ///     assert_eq!(pix.get((0,1)), red);
    ///
    ///     pix.copy_pixel(10,10, red); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_pixel<C: Color>(&mut self, x: usize, y: usize, c: C) {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x,y), c);
    }
}

impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl<T: Order> Source for Pixfmt<T> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        T::read(&self.rbuf[id])
    }
}

impl<T: Order> Pixel for Pixfmt<T> {
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        T::write(&mut self.rbuf[id], Rgba8::from_trait(c));
    }
    /// Fill from (`x`,`y`) to (`x+n-1`,`y`), encoding the color only once
    fn copy_hline<C: Color>(&mut self, x: usize, y: usize, n: usize, c: C) {
        debug_assert!(x + n <= self.rbuf.width, "hline {}+{} > {} width", x, n, self.rbuf.width);
        let mut px = [0u8; BPP];
        T::write(&mut px, Rgba8::from_trait(c));
        let i0 = self.offset(x, y);
        for p in self.rbuf.data[i0 .. i0 + n * BPP].chunks_exact_mut(BPP) {
            p.copy_from_slice(&px);
        }
    }
}

impl Order for Rgba8 {
    fn read(p: &[u8]) -> Rgba8 {
        Rgba8::new(p[0], p[1], p[2], p[3])
    }
    fn write(p: &mut [u8], c: Rgba8) {
        p[0] = c.r;
        p[1] = c.g;
        p[2] = c.b;
        p[3] = c.a;
    }
}

// Red and Blue swap places, Green and Alpha stay put
impl Order for Bgra8 {
    fn read(p: &[u8]) -> Rgba8 {
        Rgba8::new(p[2], p[1], p[0], p[3])
    }
    fn write(p: &mut [u8], c: Rgba8) {
        p[0] = c.b;
        p[1] = c.g;
        p[2] = c.r;
        p[3] = c.a;
    }
}

/// Generic image target, one pixel at a time
impl Pixel for image::RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }
    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        self.put_pixel(id.0 as u32, id.1 as u32, Rgba8::from_trait(c).into());
    }
}

impl Source for image::RgbaImage {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        Rgba8::from_trait(*self.get_pixel(id.0 as u32, id.1 as u32))
    }
}
