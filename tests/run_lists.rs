use aggspan::*;
use proptest::prelude::*;

mod common;
use common::*;

fn red() -> Rgba8 { Rgba8::new(255,0,0,255) }
fn blue() -> Rgba8 { Rgba8::new(0,0,255,255) }
fn green() -> Rgba8 { Rgba8::new(0,255,0,255) }

fn runs(sp: &CompressSpanner, y: usize) -> Vec<(usize, usize, Rgba8)> {
    sp.runs(y).map(|r| (r.x0, r.x1, r.color)).collect()
}

fn flush(sp: &CompressSpanner) -> Pixfmt<Rgba8> {
    let mut pix = Pixfmt::<Rgba8>::new(sp.width(), sp.height());
    sp.draw_to_buffer(&mut pix);
    pix
}

#[test]
fn red_then_blue() {
    init_logging();
    let mut sp = CompressSpanner::with_bounds(10, 1).unwrap();
    assert_eq!(sp.op(), Op::Over);
    assert_eq!(sp.bg_color(), Rgba8::transparent());
    sp.set_color(red());
    sp.span(0, 2, 5, COVER_FULL);
    sp.set_color(blue());
    sp.span(0, 4, 8, COVER_FULL);
    assert_eq!(runs(&sp, 0), vec![(2,4,red()), (4,8,blue())]);

    let pix = flush(&sp);
    let want = [0,0,1,1,2,2,2,2,0,0];
    for (x, &w) in want.iter().enumerate() {
        let c = [Rgba8::transparent(), red(), blue()][w];
        assert_eq!(pix.get((x,0)), c, "pixel {}", x);
    }
}

#[test]
fn green_halves_join() {
    let mut sp = CompressSpanner::with_bounds(10, 1).unwrap();
    sp.set_color(green());
    let mut f = sp.span_func();
    f.span(0, 0, 5, COVER_FULL);
    f.span(0, 5, 10, COVER_FULL);
    assert_eq!(runs(&sp, 0), vec![(0,10,green())]);
    assert_eq!(sp.num_runs(), 1);
}

#[test]
fn unit_spans_make_one_run() {
    let n = 500;
    let mut sp = CompressSpanner::with_bounds(n, 3).unwrap();
    sp.set_color(Rgba8::new(10,20,30,40));
    {
        let mut f = sp.span_func();
        for x in 0 .. n {
            f.span(1, x, x + 1, COVER_FULL);
        }
    }
    assert_eq!(runs(&sp, 1), vec![(0, n, Rgba8::new(10,20,30,40))]);
    assert_eq!(sp.num_runs(), 1);
    // Heads plus a single run cell
    assert_eq!(sp.len(), 3 + 1);
}

#[test]
fn clear_is_idempotent() {
    let (w, h) = (30, 20);
    let discs = scene(w, h);
    let mut sp = draw_compressed(w, h, Op::Over, &discs);
    assert!(!sp.is_empty());
    sp.clear();
    let once = (sp.len(), flush(&sp));
    sp.clear();
    assert_eq!((sp.len(), flush(&sp)), once);

    let fresh = CompressSpanner::with_bounds(w, h).unwrap();
    assert_eq!(once.0, fresh.len());
    assert_eq!(once.1, flush(&fresh));
    assert!(once.1.pixeldata().iter().all(|&v| v == 0));
}

#[test]
fn opaque_over_is_replace() {
    let (w, h) = (40, 30);
    let discs : Vec<_> = scene(w, h).into_iter()
        .filter(|d| d.color.a == 255)
        .collect();
    let over = draw_compressed(w, h, Op::Over, &discs);
    let replace = draw_compressed(w, h, Op::Replace, &discs);
    // Partial coverage still blends, only fully covered runs agree
    let mut a = flush(&over);
    let mut b = flush(&replace);
    for y in 0 .. h {
        for x in 0 .. w {
            if a.get((x,y)).a != 255 || b.get((x,y)).a != 255 {
                a.copy_pixel(x, y, Rgba8::transparent());
                b.copy_pixel(x, y, Rgba8::transparent());
            }
        }
    }
    assert_eq!(a, b);

    let mut sp = CompressSpanner::with_bounds(8, 1).unwrap();
    sp.set_color(Rgba8::new(10,20,30,128));
    sp.span(0, 0, 8, COVER_FULL);
    sp.set_color(Rgba8::new(1,2,3,255));
    sp.span(0, 2, 6, COVER_FULL);
    assert_eq!(runs(&sp, 0)[1], (2, 6, Rgba8::new(1,2,3,255)));
}

#[test]
fn gaps_keep_target() {
    let mut sp = CompressSpanner::with_bounds(6, 2).unwrap();
    sp.set_color(blue());
    sp.span(1, 2, 4, COVER_FULL);

    let mut pix = Pixfmt::<Bgra8>::new(6, 2);
    for y in 0 .. 2 {
        pix.copy_hline(0, y, 6, Rgba8::white());
    }
    sp.draw_to_buffer(&mut pix);
    for x in 0 .. 6 {
        assert_eq!(pix.get((x,0)), Rgba8::white());
        let want = if (2 .. 4).contains(&x) { blue() } else { Rgba8::white() };
        assert_eq!(pix.get((x,1)), want);
    }
}

#[test]
fn background_under_new_runs() {
    let mut sp = CompressSpanner::with_bounds(10, 1).unwrap();
    sp.set_bg_color(Rgba8::new(0,0,0,255));
    sp.set_color(Rgba8::white());
    sp.span(0, 0, 4, 0x8000);
    assert_eq!(runs(&sp, 0), vec![(0, 4, Rgba8::new(128,128,128,255))]);

    sp.set_op(Op::Replace);
    sp.span(0, 6, 8, 0x8000);
    assert_eq!(runs(&sp, 0)[1], (6, 8, Rgba8::new(128,128,128,128)));
}

#[test]
fn rebinding_resets() {
    let mut sp = CompressSpanner::new();
    assert!(sp.set_bounds(0, 0).is_err());
    assert!(!sp.is_bound());
    sp.set_bounds(4, 4).unwrap();
    sp.span(3, 0, 4, COVER_FULL);
    assert_eq!(sp.num_runs(), 1);
    sp.set_bounds(8, 2).unwrap();
    assert_eq!(sp.num_runs(), 0);
    sp.span(1, 4, 8, COVER_FULL);
    assert_eq!(runs(&sp, 1), vec![(4, 8, Rgba8::black())]);
}

proptest! {
    #[test]
    fn run_lists_stay_canonical(
        bg in prop_oneof![Just(Rgba8::transparent()),
                          (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
                              .prop_map(|(r, g, b, a)| Rgba8::new(r, g, b, a))],
        ops in prop::collection::vec(
            (0usize .. 3, 0usize .. 32, 1usize .. 16,
             prop_oneof![Just(COVER_FULL), 0u32 ..= COVER_FULL],
             0usize .. 3, any::<bool>()),
            1 .. 40))
    {
        let colors = [red(), Rgba8::new(0,0,128,128), Rgba8::transparent()];
        let mut sp = CompressSpanner::with_bounds(32, 3).unwrap();
        sp.set_bg_color(bg);
        for (y, x0, n, ma, c, over) in ops {
            sp.set_op(if over { Op::Over } else { Op::Replace });
            sp.set_color(colors[c]);
            sp.span(y, x0, (x0 + n).min(32), ma);
        }
        check_run_lists(&sp);
        sp.clear();
        prop_assert!(sp.is_empty());
    }
}
