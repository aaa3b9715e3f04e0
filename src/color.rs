//! Colors
//!
//! All colors are premultiplied; a channel is never larger than alpha.

use crate::Color;

/// Color as Red, Green, Blue, and Alpha
///
/// Also names the standard pixel layout, bytes stored as R,G,B,A
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Convert from any [Color] using its 8-bit components
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
}

impl Color for Rgba8 {
    fn   red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn  blue8(&self) -> u8 { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

/// Color with Red and Blue exchanged in memory
///
/// Names the swapped pixel layout, bytes stored as B,G,R,A.
/// The logical color is the same as an [Rgba8] with equal fields.
///
/// [Rgba8]: struct.Rgba8.html
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Bgra8 {
    /// Blue
    pub b: u8,
    /// Green
    pub g: u8,
    /// Red
    pub r: u8,
    /// Alpha
    pub a: u8,
}

impl Bgra8 {
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Bgra8 { b, g, r, a }
    }
}

impl Color for Bgra8 {
    fn   red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn  blue8(&self) -> u8 { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

impl From<Rgba8> for Bgra8 {
    fn from(c: Rgba8) -> Bgra8 {
        Bgra8::new(c.r, c.g, c.b, c.a)
    }
}
impl From<Bgra8> for Rgba8 {
    fn from(c: Bgra8) -> Rgba8 {
        Rgba8::new(c.r, c.g, c.b, c.a)
    }
}

/// Color with 16-bit components, [0,65535]
///
/// Colors from procedural sources (gradients) keep their extra
/// precision until blended down to 8 bits.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba16 {
    /// Red
    pub r: u16,
    /// Green
    pub g: u16,
    /// Blue
    pub b: u16,
    /// Alpha
    pub a: u16,
}

impl Rgba16 {
    /// Create new color
    pub fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Rgba16 { r, g, b, a }
    }
    /// Convert from any [Color] using its 16-bit components
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red16(), c.green16(), c.blue16(), c.alpha16())
    }
}

impl Color for Rgba16 {
    fn   red8(&self) -> u8 { (self.r >> 8) as u8 }
    fn green8(&self) -> u8 { (self.g >> 8) as u8 }
    fn  blue8(&self) -> u8 { (self.b >> 8) as u8 }
    fn alpha8(&self) -> u8 { (self.a >> 8) as u8 }
    fn   red16(&self) -> u16 { self.r }
    fn green16(&self) -> u16 { self.g }
    fn  blue16(&self) -> u16 { self.b }
    fn alpha16(&self) -> u16 { self.a }
}

impl From<Rgba8> for Rgba16 {
    fn from(c: Rgba8) -> Rgba16 {
        Rgba16::from_trait(c)
    }
}

impl Color for image::Rgba<u8> {
    fn   red8(&self) -> u8 { self.0[0] }
    fn green8(&self) -> u8 { self.0[1] }
    fn  blue8(&self) -> u8 { self.0[2] }
    fn alpha8(&self) -> u8 { self.0[3] }
}

impl From<Rgba8> for image::Rgba<u8> {
    fn from(c: Rgba8) -> image::Rgba<u8> {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

/// Colors are equal for the purpose of merging runs
///
/// Two fully transparent colors are always equal
pub fn same_color(c1: Rgba8, c2: Rgba8) -> bool {
    (c1.a == 0 && c2.a == 0) || c1 == c2
}
