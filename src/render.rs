//! Direct Renderer
//!
//! Spans are blended into the pixel buffer as they arrive

use crate::buffer::BPP;
use crate::color::{Rgba8, Rgba16};
use crate::math::CoverColor;
use crate::pixfmt::Pixfmt;

use crate::Color;
use crate::Op;
use crate::Order;
use crate::Pixel;
use crate::SpanFn;
use crate::Spanner;

use tracing::debug;

/// Procedural color at (`x`,`y`), e.g. a gradient
pub type ColorFunc<'a> = Box<dyn Fn(usize, usize) -> Rgba16 + 'a>;

/// Color source of a span
pub enum Paint<'a> {
    /// Single foreground color
    Solid(Rgba8),
    /// Color computed for each pixel
    Func(ColorFunc<'a>),
}

impl std::fmt::Debug for Paint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Paint::Solid(c) => f.debug_tuple("Solid").field(c).finish(),
            Paint::Func(_) => f.write_str("Func"),
        }
    }
}

/// Spanner drawing directly onto a pixel buffer
///
/// The buffer is borrowed for the lifetime of the spanner; channel order
/// follows the [Pixfmt] type.
///
///     use aggspan::*;
///
///     let mut pix = Pixfmt::<Bgra8>::new(4,1);
///     {
///         let mut ren = ImgSpanner::new(&mut pix);
///         ren.set_color(Rgba8::new(255,0,0,255));
///         let mut f = ren.span_func();
///         f.span(0, 1, 3, COVER_FULL);
///     }
///     assert_eq!(pix.get((1,0)), Rgba8::new(255,0,0,255));
///     assert_eq!(pix.pixeldata()[4..8], [0,0,255,255]);
///
/// [Pixfmt]: ../pixfmt/struct.Pixfmt.html
#[derive(Debug)]
pub struct ImgSpanner<'a, T: Order> {
    pix: &'a mut Pixfmt<T>,
    op: Op,
    paint: Paint<'a>,
}

impl<'a, T: Order> ImgSpanner<'a, T> {
    /// Create a new spanner drawing in opaque black with [Op::Over]
    ///
    /// [Op::Over]: ../enum.Op.html
    pub fn new(pix: &'a mut Pixfmt<T>) -> Self {
        debug!(width = pix.width(), height = pix.height(), "bind image spanner");
        Self { pix, op: Op::default(), paint: Paint::Solid(Rgba8::black()) }
    }
    /// Set how pixels are overlayed
    pub fn set_op(&mut self, op: Op) {
        self.op = op;
    }
    pub fn op(&self) -> Op {
        self.op
    }
    /// Draw with a single color; replaces any color function
    pub fn set_color<C: Color>(&mut self, c: C) {
        self.paint = Paint::Solid(Rgba8::from_trait(c));
    }
    /// Draw with a color computed at each pixel
    pub fn set_color_func<F, C>(&mut self, f: F)
        where F: Fn(usize, usize) -> C + 'a,
              C: Color
    {
        debug!("image spanner color function");
        self.paint = Paint::Func(Box::new(move |x, y| Rgba16::from_trait(f(x, y))));
    }
    pub fn paint(&self) -> &Paint<'a> {
        &self.paint
    }
    /// Pixel buffer being drawn on
    pub fn pixfmt(&self) -> &Pixfmt<T> {
        &*self.pix
    }

    fn fg(&self) -> Rgba8 {
        match self.paint {
            Paint::Solid(c) => c,
            Paint::Func(_) => Rgba8::transparent(),
        }
    }

    /// Color function, replacing the previous values
    fn span_color_func_replace(&mut self, y: usize, x0: usize, x1: usize, ma: u32) {
        debug_assert!(x0 <= x1, "span {} > {}", x0, x1);
        let ImgSpanner { pix, paint, .. } = self;
        if let Paint::Func(f) = &*paint {
            let mut i = pix.offset(x0, y);
            for x in x0 .. x1 {
                pix.write_at(i, CoverColor::new(&f(x, y), ma).replace());
                i += BPP;
            }
        }
    }

    /// Color function, composited over the previous values
    fn span_color_func_over(&mut self, y: usize, x0: usize, x1: usize, ma: u32) {
        debug_assert!(x0 <= x1, "span {} > {}", x0, x1);
        let ImgSpanner { pix, paint, .. } = self;
        if let Paint::Func(f) = &*paint {
            let mut i = pix.offset(x0, y);
            for x in x0 .. x1 {
                let d = pix.read_at(i);
                pix.write_at(i, CoverColor::new(&f(x, y), ma).over(d));
                i += BPP;
            }
        }
    }

    /// Foreground color, replacing the previous values
    fn span_fg_color_replace(&mut self, y: usize, x0: usize, x1: usize, ma: u32) {
        debug_assert!(x0 <= x1, "span {} > {}", x0, x1);
        let c = CoverColor::new(&self.fg(), ma).replace();
        self.pix.copy_hline(x0, y, x1 - x0, c);
    }

    /// Foreground color, composited over the previous values
    fn span_fg_color_over(&mut self, y: usize, x0: usize, x1: usize, ma: u32) {
        debug_assert!(x0 <= x1, "span {} > {}", x0, x1);
        let cc = CoverColor::new(&self.fg(), ma);
        if cc.is_opaque() {
            // Nothing shows through
            self.pix.copy_hline(x0, y, x1 - x0, cc.replace());
            return;
        }
        let i0 = self.pix.offset(x0, y);
        for i in (i0 .. i0 + (x1 - x0) * BPP).step_by(BPP) {
            let d = self.pix.read_at(i);
            self.pix.write_at(i, cc.over(d));
        }
    }
}

impl<T: Order> Spanner for ImgSpanner<'_, T> {
    fn span_fn(&self) -> SpanFn<Self> {
        match (&self.paint, self.op) {
            (Paint::Func(_), Op::Over)    => Self::span_color_func_over,
            (Paint::Func(_), Op::Replace) => Self::span_color_func_replace,
            (Paint::Solid(_), Op::Over)    => Self::span_fg_color_over,
            (Paint::Solid(_), Op::Replace) => Self::span_fg_color_replace,
        }
    }
}
