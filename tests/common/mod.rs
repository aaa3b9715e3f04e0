#![allow(dead_code)]

use aggspan::*;

/// Filled circle in a premultiplied color
#[derive(Debug,Clone,Copy)]
pub struct Disc {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: Rgba8,
}

impl Disc {
    pub fn new(cx: f64, cy: f64, r: f64, color: Rgba8) -> Self {
        Self { cx, cy, r, color }
    }
    /// Number of 4x4 subsamples of pixel (`x`,`y`) inside the circle
    fn hits(&self, x: usize, y: usize) -> u32 {
        let mut n = 0;
        for sy in 0 .. 4 {
            for sx in 0 .. 4 {
                let px = x as f64 + (sx as f64 + 0.5) / 4.0 - self.cx;
                let py = y as f64 + (sy as f64 + 0.5) / 4.0 - self.cy;
                if px * px + py * py <= self.r * self.r {
                    n += 1;
                }
            }
        }
        n
    }
    /// Sweep the disc row by row, sending coverage spans to `f`
    pub fn rasterize<F>(&self, width: usize, height: usize, f: &mut F)
        where F: FnMut(usize, usize, usize, u32)
    {
        let mut sl = ScanlineU8::new();
        for y in 0 .. height {
            sl.reset(y);
            for x in 0 .. width {
                let n = self.hits(x, y);
                if n > 0 {
                    sl.add_cell(x, (n * 255 / 16) as u8);
                }
            }
            sl.render(f);
        }
    }
}

/// Overlapping translucent and opaque discs, some partly off the image
pub fn scene(width: usize, height: usize) -> Vec<Disc> {
    let (w, h) = (width as f64, height as f64);
    vec![
        Disc::new(w * 0.5,  h * 0.5,  w * 0.40, Rgba8::new(200, 30, 30, 255)),
        Disc::new(w * 0.35, h * 0.40, w * 0.25, Rgba8::new(0, 60, 120, 128)),
        Disc::new(w * 0.65, h * 0.60, w * 0.20, Rgba8::new(10, 100, 10, 100)),
        Disc::new(w * 0.90, h * 0.10, w * 0.30, Rgba8::new(60, 60, 0, 64)),
        Disc::new(w * 0.50, h * 0.55, w * 0.05, Rgba8::new(0, 0, 0, 255)),
        Disc::new(w * 0.20, h * 0.80, w * 0.15, Rgba8::new(1, 2, 3, 4)),
    ]
}

/// Draw `discs` directly onto `pix`
pub fn draw_direct<T: Order>(pix: &mut Pixfmt<T>, op: Op, discs: &[Disc]) {
    let (w, h) = (pix.width(), pix.height());
    let mut ren = ImgSpanner::new(pix);
    ren.set_op(op);
    for d in discs {
        ren.set_color(d.color);
        let mut f = ren.span_func().into_fn_mut();
        d.rasterize(w, h, &mut f);
    }
}

/// Collect `discs` into run lists of a `width` by `height` image
pub fn draw_compressed(width: usize, height: usize, op: Op, discs: &[Disc]) -> CompressSpanner {
    let mut sp = CompressSpanner::with_bounds(width, height).unwrap();
    sp.set_op(op);
    for d in discs {
        sp.set_color(d.color);
        let mut f = sp.span_func().into_fn_mut();
        d.rasterize(width, height, &mut f);
    }
    sp
}

/// Runs of every row are ordered, disjoint and never touch a run of the same color
pub fn check_run_lists(sp: &CompressSpanner) {
    for y in 0 .. sp.height() {
        let runs : Vec<_> = sp.runs(y).collect();
        for r in &runs {
            assert!(r.x0 < r.x1, "row {} empty run {:?}", y, r);
            assert!(r.x1 <= sp.width(), "row {} run {:?} past width", y, r);
        }
        for w in runs.windows(2) {
            assert!(w[0].x1 <= w[1].x0, "row {} overlap {:?} {:?}", y, w[0], w[1]);
            assert!(!(w[0].x1 == w[1].x0 && same_color(w[0].color, w[1].color)),
                    "row {} unmerged {:?} {:?}", y, w[0], w[1]);
        }
    }
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
