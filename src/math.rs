//! Fixed point color blending
//!
//! Coverage is a 16-bit fixed point value where 0xFFFF is a fully covered
//! pixel.  Source colors are used at 16 bits per channel and destination
//! colors at 8 bits per channel.  All results are truncated, never rounded,
//! to 8 bits.
//!
//! Replace:
//!
//! ```text
//! out = (c * ma / M) >> 8
//! ```
//!
//! Over ([Porter-Duff](https://en.wikipedia.org/wiki/Alpha_compositing)):
//!
//! ```text
//! inv = (M - (a * ma / M)) * 0x101
//! out = (d * inv + c * ma) / M >> 8
//! ```
//!
//! with `M = 0xFFFF`, `c` and `a` the 16-bit source, `d` the 8-bit destination

use crate::color::Rgba8;
use crate::Color;
use crate::Op;

/// Coverage of a fully covered pixel
pub const COVER_FULL: u32 = 0xFFFF;

const M: u64 = COVER_FULL as u64;

/// Scale a 16-bit channel product back down to 8 bits
fn down(v: u64) -> u8 {
    ((v / M) >> 8).min(255) as u8
}

/// Source color weighted by a coverage value
///
/// Computed once per span so the per pixel work is a handful of
/// multiplies.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct CoverColor {
    r: u64,
    g: u64,
    b: u64,
    a: u64,
    /// Weight of the destination in Over, 8-bit channels to 16 bits
    inv: u64,
}

impl CoverColor {
    /// Weight color `c` by coverage `ma`
    pub fn new<C: Color>(c: &C, ma: u32) -> Self {
        debug_assert!(ma <= COVER_FULL, "coverage {} out of range", ma);
        let ma = u64::from(ma);
        let a = u64::from(c.alpha16()) * ma;
        Self {
            r: u64::from(c.red16())   * ma,
            g: u64::from(c.green16()) * ma,
            b: u64::from(c.blue16())  * ma,
            a,
            inv: (M - a / M) * 0x101,
        }
    }
    /// Color is fully opaque at this coverage; the destination is ignored
    pub fn is_opaque(&self) -> bool {
        self.a == M * M
    }
    /// Coverage weighted color, ignoring what is underneath
    pub fn replace(&self) -> Rgba8 {
        Rgba8::new(down(self.r), down(self.g), down(self.b), down(self.a))
    }
    /// Coverage weighted color composited over `d`
    pub fn over(&self, d: Rgba8) -> Rgba8 {
        let mix = |d: u8, c: u64| down(u64::from(d) * self.inv + c);
        Rgba8::new(mix(d.r, self.r), mix(d.g, self.g), mix(d.b, self.b), mix(d.a, self.a))
    }
}

/// Blend color `c` at coverage `ma` onto the `under` color
///
/// Over against a transparent `under`, or with an opaque result, is a
/// Replace.
pub fn blend<C: Color>(op: Op, under: Rgba8, c: &C, ma: u32) -> Rgba8 {
    let cc = CoverColor::new(c, ma);
    match op {
        Op::Over if under.a != 0 && !cc.is_opaque() => cc.over(under),
        _ => cc.replace(),
    }
}
