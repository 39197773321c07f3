use slideshow::layout::scaled_size;

fn assert_aspect_preserved(w0: u32, h0: u32, w1: u32, h1: u32) {
    // Compare ratios within a small epsilon
    let r0 = (w0 as f32) / (h0 as f32);
    let r1 = (w1 as f32) / (h1 as f32);
    assert!((r0 - r1).abs() < 0.01, "aspect changed: {} vs {}", r0, r1);
}

#[test]
fn wide_source_on_1080p() {
    let (out_w, out_h) = scaled_size(1871, 1223, 1920, 1080);
    assert_eq!((out_w, out_h), (1652, 1080));
    assert!(out_w <= 1920 && out_h <= 1080);
    assert_aspect_preserved(1871, 1223, out_w, out_h);
}

#[test]
fn square_source_scales_up_to_box_height() {
    assert_eq!(scaled_size(100, 100, 1920, 1080), (1080, 1080));
}

#[test]
fn landscape_large_on_1080p() {
    let (out_w, out_h) = scaled_size(4032, 3024, 1920, 1080);
    assert_eq!((out_w, out_h), (1440, 1080));
    assert_aspect_preserved(4032, 3024, out_w, out_h);
}

#[test]
fn portrait_large_on_1080x1920() {
    let (out_w, out_h) = scaled_size(3024, 4032, 1080, 1920);
    assert_eq!((out_w, out_h), (1080, 1440));
    assert_aspect_preserved(3024, 4032, out_w, out_h);
}

#[test]
fn output_always_fills_one_axis_of_the_box() {
    for (w, h) in [(640, 480), (480, 640), (3000, 1000), (1000, 3000), (77, 33)] {
        let (out_w, out_h) = scaled_size(w, h, 1920, 1080);
        assert!(
            out_w == 1920 || out_h == 1080,
            "{w}x{h} fitted to {out_w}x{out_h}"
        );
        assert_aspect_preserved(w, h, out_w, out_h);
    }
}
