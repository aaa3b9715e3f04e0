//! Scanline
//!
//! Collects the 8-bit cell covers of a single row, as produced by an
//! agg style rasterizer sweep, and hands them to a spanner as coverage
//! spans.

/// Run of cells starting at `x`
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Span {
    pub x: usize,
    pub len: usize,
    pub covers: Vec<u8>,
}

/// Cells of a single row
#[derive(Debug,Default)]
pub struct ScanlineU8 {
    /// Column after the last cell added
    next_x: Option<usize>,
    pub spans: Vec<Span>,
    pub y: usize,
}

/// Convert an 8-bit cover into a 16-bit coverage
pub fn cover_to_coverage(cover: u8) -> u32 {
    u32::from(cover) * 0x101
}

impl ScanlineU8 {
    pub fn new() -> Self {
        Self::default()
    }
    /// Remove all cells and move to row `y`
    pub fn reset(&mut self, y: usize) {
        self.next_x = None;
        self.spans.clear();
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Add `len` cells starting at `x` with the same `cover`
    pub fn add_span(&mut self, x: usize, len: usize, cover: u8) {
        match self.spans.last_mut() {
            Some(cur) if self.next_x == Some(x) => {
                cur.len += len;
                cur.covers.extend(std::iter::repeat(cover).take(len));
            }
            _ => self.spans.push(Span { x, len, covers: vec![cover; len] }),
        }
        self.next_x = Some(x + len);
    }
    /// Add a single cell at `x`
    pub fn add_cell(&mut self, x: usize, cover: u8) {
        self.add_span(x, 1, cover);
    }
    /// Send the row to `f` as spans of equal coverage
    ///
    /// Cells without cover are skipped
    ///
    ///     use aggspan::*;
    ///
    ///     let mut sl = ScanlineU8::new();
    ///     sl.reset(3);
    ///     sl.add_cell(1, 128);
    ///     sl.add_span(2, 4, 255);
    ///     sl.add_cell(6, 0);
    ///
    ///     let mut out = vec![];
    ///     sl.render(&mut |y, x0, x1, cover| out.push((y, x0, x1, cover)));
    ///     assert_eq!(out, vec![(3, 1, 2, 0x8080), (3, 2, 6, 0xFFFF)]);
    ///
    pub fn render<F>(&self, f: &mut F)
        where F: FnMut(usize, usize, usize, u32)
    {
        for span in &self.spans {
            let mut x0 = span.x;
            for run in span.covers.chunk_by(|a, b| a == b) {
                let x1 = x0 + run.len();
                if run[0] != 0 {
                    f(self.y, x0, x1, cover_to_coverage(run[0]));
                }
                x0 = x1;
            }
        }
    }
}
