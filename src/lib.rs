//! Span compositing for scanline rasterizers
//!
//! How does this work
//!
//!    rasterizer  -- (y, x0, x1, cover) -->  Spanner
//!
//!  Direct
//!    spanner = ImgSpanner( Pixfmt( data ) )
//!    span()
//!      blend each covered pixel into the buffer immediately
//!
//!  Compressed
//!    spanner = CompressSpanner( width, height )
//!    span()
//!      merge into the row's run list
//!        add_link()  -- blend against bg or existing run, coalesce
//!    draw_to_buffer( Pixfmt( data ) )
//!      copy_hline()  -- one per run
//!    clear()
//!
//! Both produce byte identical images for the same spans.
//!
//! Coverage values are 16-bit, see [COVER_FULL].
//!
//! [COVER_FULL]: math/constant.COVER_FULL.html

pub mod color;
pub mod math;
pub mod buffer;
pub mod pixfmt;
pub mod render;
pub mod compress;
pub mod scan;
pub mod error;

pub use crate::color::*;
pub use crate::math::*;
pub use crate::buffer::*;
pub use crate::pixfmt::*;
pub use crate::render::*;
pub use crate::compress::*;
pub use crate::scan::*;
pub use crate::error::{Error, Result};

/// Access Color properties and components
///
/// Channels are premultiplied by alpha
pub trait Color: std::fmt::Debug + Copy {
    /// Red component as u8 [0,255]
    fn red8(&self) -> u8;
    /// Green component as u8 [0,255]
    fn green8(&self) -> u8;
    /// Blue component as u8 [0,255]
    fn blue8(&self) -> u8;
    /// Alpha component as u8 [0,255]
    fn alpha8(&self) -> u8;
    /// Red component as u16 [0,65535]
    fn red16(&self) -> u16 { u16::from(self.red8()) * 0x101 }
    /// Green component as u16 [0,65535]
    fn green16(&self) -> u16 { u16::from(self.green8()) * 0x101 }
    /// Blue component as u16 [0,65535]
    fn blue16(&self) -> u16 { u16::from(self.blue8()) * 0x101 }
    /// Alpha component as u16 [0,65535]
    fn alpha16(&self) -> u16 { u16::from(self.alpha8()) * 0x101 }
    /// Color is completely transparent
    fn is_transparent(&self) -> bool { self.alpha8() == 0 }
}

/// How pixels are overlayed
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Op {
    /// Overwrite the destination with the covered source
    Replace,
    /// Porter-Duff source over destination
    Over,
}

impl Default for Op {
    fn default() -> Op {
        Op::Over
    }
}

/// Access raw pixel data
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Read a pixel
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Destination of drawn pixels
pub trait Pixel {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Set pixel at (`x`,`y`) to color `c`
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Set `n` pixels from (`x`,`y`) to (`x+n-1`,`y`) to color `c`
    fn copy_hline<C: Color>(&mut self, x: usize, y: usize, n: usize, c: C) {
        for i in 0 .. n {
            self.set((x+i, y), c);
        }
    }
}

/// Channel order of pixels in a linear buffer
///
/// Only the byte boundary knows about the order, blending is done on
/// logical colors.
pub trait Order {
    /// Read 4 bytes as a color
    fn read(p: &[u8]) -> Rgba8;
    /// Write color into 4 bytes
    fn write(p: &mut [u8], c: Rgba8);
}

/// Span function: spanner, row, start column, end column (exclusive), coverage
pub type SpanFn<S> = fn(&mut S, usize, usize, usize, u32);

/// Consumer of spans from a rasterizer
pub trait Spanner: Sized {
    /// Select the span function for the current color source and operation
    fn span_fn(&self) -> SpanFn<Self>;
    /// Draw a single span
    ///
    /// Prefer [span_func] when drawing many spans with the same settings.
    ///
    /// [span_func]: #method.span_func
    fn span(&mut self, y: usize, x0: usize, x1: usize, cover: u32) {
        (self.span_fn())(self, y, x0, x1, cover)
    }
    /// Bind the span function selected for the current settings
    fn span_func(&mut self) -> SpanFunc<'_, Self> {
        SpanFunc::new(self)
    }
}

/// Spanner with its span function selected once for a drawing pass
///
/// Holds the spanner mutably, settings cannot change until it is dropped.
pub struct SpanFunc<'a, S: Spanner> {
    spanner: &'a mut S,
    f: SpanFn<S>,
}

impl<'a, S: Spanner> SpanFunc<'a, S> {
    pub fn new(spanner: &'a mut S) -> Self {
        let f = spanner.span_fn();
        Self { spanner, f }
    }
    /// Draw a single span
    pub fn span(&mut self, y: usize, x0: usize, x1: usize, cover: u32) {
        (self.f)(&mut *self.spanner, y, x0, x1, cover)
    }
    /// Closure form, for rasterizers taking a callback
    pub fn into_fn_mut(self) -> impl FnMut(usize, usize, usize, u32) + 'a {
        let SpanFunc { spanner, f } = self;
        move |y, x0, x1, cover| f(&mut *spanner, y, x0, x1, cover)
    }
}
