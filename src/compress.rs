//! Compressed Span Renderer
//!
//! Spans are accumulated per row as linked lists of runs, each run a
//! column interval with a single, already blended, color.  Runs are
//! stored in one vector and linked by index.  The first `height` cells
//! are the list heads of each row; no run links back to a head, so index
//! 0 doubles as the end of list marker.
//!
//! ```text
//! cells: [ head 0 | head 1 | ... | head h-1 | run | run | ... ]
//! ```
//!
//! Adjacent runs of the same color are merged as they are added, so a
//! solid fill of a row stays a single run regardless of how many spans
//! it was drawn with.

use crate::color::{same_color, Rgba8};
use crate::error::{Error, Result};
use crate::math::blend;

use crate::Color;
use crate::Op;
use crate::Pixel;
use crate::SpanFn;
use crate::Spanner;

use tracing::{debug, trace};

/// End of a row list
const NIL: usize = 0;

/// Single run in a row: columns `x0 .. x1` drawn with `color`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct SpanCell {
    /// First column
    pub x0: usize,
    /// One past the last column
    pub x1: usize,
    /// Index of the next run, 0 at the end of the row
    pub next: usize,
    /// Blended color
    pub color: Rgba8,
}

/// Spanner collecting runs of colors per row
///
/// Spans are blended as they are added against the background color or
/// the run already present.  The result is written out with
/// [draw_to_buffer] and discarded with [clear].
///
///     use aggspan::*;
///
///     let mut sp = CompressSpanner::with_bounds(10, 1).unwrap();
///     sp.set_color(Rgba8::new(255,0,0,255));
///     sp.span(0, 2, 5, COVER_FULL);
///     sp.set_color(Rgba8::new(0,0,255,255));
///     sp.span(0, 4, 8, COVER_FULL);
///
///     let runs : Vec<_> = sp.runs(0).map(|r| (r.x0, r.x1)).collect();
///     assert_eq!(runs, vec![(2,4), (4,8)]);
///
///     let mut pix = Pixfmt::<Rgba8>::new(10,1);
///     sp.draw_to_buffer(&mut pix);
///     assert_eq!(pix.get((3,0)), Rgba8::new(255,0,0,255));
///     assert_eq!(pix.get((4,0)), Rgba8::new(0,0,255,255));
///
/// [draw_to_buffer]: #method.draw_to_buffer
/// [clear]: #method.clear
#[derive(Debug,Clone)]
pub struct CompressSpanner {
    width: usize,
    height: usize,
    op: Op,
    fg: Rgba8,
    bg: Rgba8,
    cells: Vec<SpanCell>,
    /// Row and run most recently drawn
    last: Option<(usize, usize)>,
}

impl Default for CompressSpanner {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressSpanner {
    /// Create an unbound spanner
    ///
    /// Bounds must be set with [set_bounds] before drawing
    ///
    /// [set_bounds]: #method.set_bounds
    pub fn new() -> Self {
        Self { width: 0, height: 0,
               op: Op::default(),
               fg: Rgba8::black(),
               bg: Rgba8::transparent(),
               cells: vec![],
               last: None,
        }
    }
    /// Create a spanner for an image of `width` by `height`
    pub fn with_bounds(width: usize, height: usize) -> Result<Self> {
        let mut sp = Self::new();
        sp.set_bounds(width, height)?;
        Ok(sp)
    }
    /// Set the image size and clear all runs
    pub fn set_bounds(&mut self, width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBounds { width, height });
        }
        self.width = width;
        self.height = height;
        debug!(width, height, "bind compress spanner");
        self.clear();
        Ok(())
    }
    /// Bounds have been set
    pub fn is_bound(&self) -> bool {
        self.height > 0
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Remove all runs, leaving only the row heads
    pub fn clear(&mut self) {
        trace!(cells = self.cells.len(), "clear compress spanner");
        self.last = None;
        self.cells.clear();
        self.cells.resize(self.height, SpanCell::default());
    }
    /// Set how pixels are overlayed
    pub fn set_op(&mut self, op: Op) {
        self.op = op;
    }
    pub fn op(&self) -> Op {
        self.op
    }
    /// Set the foreground color for blending
    pub fn set_color<C: Color>(&mut self, c: C) {
        self.fg = Rgba8::from_trait(c);
    }
    /// Set the background color, used where nothing has been drawn yet
    pub fn set_bg_color<C: Color>(&mut self, c: C) {
        self.bg = Rgba8::from_trait(c);
    }
    pub fn color(&self) -> Rgba8 {
        self.fg
    }
    pub fn bg_color(&self) -> Rgba8 {
        self.bg
    }
    /// Number of cells in use, including the row heads and unlinked cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// No runs have been added since the last clear
    pub fn is_empty(&self) -> bool {
        self.cells[.. self.height].iter().all(|c| c.next == NIL)
    }
    /// Runs of row `y`, left to right
    pub fn runs(&self, y: usize) -> Runs<'_> {
        Runs { cells: &self.cells, p: self.cells[y].next }
    }
    /// Total number of runs in all rows
    pub fn num_runs(&self) -> usize {
        (0 .. self.height).map(|y| self.runs(y).count()).sum()
    }

    /// Write the runs onto `pix`
    ///
    /// Only pixels covered by a run are touched
    pub fn draw_to_buffer<P: Pixel>(&self, pix: &mut P) {
        debug_assert!(pix.width() >= self.width && pix.height() >= self.height,
                      "target {}x{} smaller than {}x{}",
                      pix.width(), pix.height(), self.width, self.height);
        for y in 0 .. self.height {
            for run in self.runs(y) {
                pix.copy_hline(run.x0, y, run.x1 - run.x0, run.color);
            }
        }
        debug!(runs = self.num_runs(), cells = self.cells.len(), "draw compressed spans");
    }

    fn blend(&self, under: Rgba8, ma: u32) -> Rgba8 {
        blend(self.op, under, &self.fg, ma)
    }

    /// Run `pp` ends at or after `x0` with color `c` and can be extended
    fn touches(&self, pp: usize, x0: usize, c: Rgba8) -> bool {
        pp >= self.height
            && self.cells[pp].x1 >= x0
            && same_color(self.cells[pp].color, c)
    }

    /// Add run `x0 .. x1` of color `c` between `pp` and `next`
    ///
    /// Extends `pp` instead when it has the same color.  Returns the run
    /// now covering `x0 .. x1`
    fn add_link(&mut self, x0: usize, x1: usize, next: usize, pp: usize, c: Rgba8) -> usize {
        if self.touches(pp, x0, c) {
            self.cells[pp].x1 = x1;
            return pp;
        }
        self.cells.push(SpanCell { x0, x1, next, color: c });
        let p = self.cells.len() - 1;
        self.cells[pp].next = p;
        p
    }

    /// Absorb the run after `p` when it touches and has the same color
    fn merge_next(&mut self, p: usize) {
        if p < self.height {
            return;
        }
        let n = self.cells[p].next;
        if n != NIL && self.touches(p, self.cells[n].x0, self.cells[n].color) {
            self.cells[p].x1 = self.cells[n].x1;
            self.cells[p].next = self.cells[n].next;
        }
    }

    /// Merge span `x0 .. x1` of row `y` with coverage `ma` into the row
    pub fn span_over(&mut self, y: usize, x0: usize, x1: usize, ma: u32) {
        debug_assert!(y < self.height, "row {} outside of height {}", y, self.height);
        debug_assert!(x0 <= x1 && x1 <= self.width, "span {}..{} outside of width {}", x0, x1, self.width);
        let (mut xi0, xi1) = (x0, x1);
        // Start after the last run drawn if the span is beyond it
        let mut pp = match self.last {
            Some((ly, lp)) if ly == y && self.cells[lp].x1 <= xi0 => lp,
            _ => y,
        };
        let mut p = self.cells[pp].next;
        while p != NIL && xi0 < xi1 {
            let sp = self.cells[p];
            if sp.x1 <= xi0 {
                // sp is before new span
                pp = p;
                p = sp.next;
                continue;
            }
            if sp.x0 >= xi1 {
                // new span is before sp
                let c = self.blend(self.bg, ma);
                let q = self.add_link(xi0, xi1, p, pp, c);
                self.merge_next(q);
                self.last = Some((y, q));
                return;
            }
            // left span
            if xi0 < sp.x0 {
                let c = self.blend(self.bg, ma);
                pp = self.add_link(xi0, sp.x0, p, pp, c);
                xi0 = sp.x0;
            } else if xi0 > sp.x0 {
                pp = self.add_link(sp.x0, xi0, p, pp, sp.color);
            }

            let c = self.blend(sp.color, ma);
            let same = self.touches(pp, xi0, c);
            if xi1 < sp.x1 {
                // middle span replaces sp, right part keeps its color
                let mid = if same {
                    self.cells[pp].x1 = xi1;
                    self.cells[pp].next = sp.next;
                    pp
                } else {
                    self.cells[p] = SpanCell { x0: xi0, x1: xi1, next: sp.next, color: c };
                    p
                };
                self.add_link(xi1, sp.x1, sp.next, mid, sp.color);
                self.last = Some((y, mid));
                return;
            }
            // middle span replaces sp up to its end
            if same {
                self.cells[pp].x1 = sp.x1;
                self.cells[pp].next = sp.next;
            } else {
                self.cells[p] = SpanCell { x0: xi0, x1: sp.x1, next: sp.next, color: c };
                pp = p;
            }
            xi0 = sp.x1;
            p = sp.next;
        }
        if xi0 < xi1 {
            // add any remaining span to the end of the row
            let c = self.blend(self.bg, ma);
            pp = self.add_link(xi0, xi1, NIL, pp, c);
        }
        self.merge_next(pp);
        self.last = Some((y, pp));
    }
}

impl Spanner for CompressSpanner {
    fn span_fn(&self) -> SpanFn<Self> {
        Self::span_over
    }
}

/// Iterator over the runs of a row
#[derive(Debug,Clone)]
pub struct Runs<'a> {
    cells: &'a [SpanCell],
    p: usize,
}

impl Iterator for Runs<'_> {
    type Item = SpanCell;
    fn next(&mut self) -> Option<SpanCell> {
        if self.p == NIL {
            return None;
        }
        let c = self.cells[self.p];
        self.p = c.next;
        Some(c)
    }
}
