//! Color space regression test
//!
//! Converts synthetic images RGB -> HSV -> RGB and checks the fixed-point
//! encoding, the achromatic sentinel, and exact reconstruction of grays
//! and saturated primaries.

use derby_color::{HUE_UNDEFINED, convert_hsv_to_rgb, convert_rgb_to_hsv, rgb_to_hsv};
use derby_core::ColorSpace;
use derby_test::{RegParams, synth};

#[test]
fn colorspace_reg() {
    let mut rp = RegParams::new("colorspace");

    // --- Test 1: image conversion agrees with the pixel conversion ---
    let rgb = synth::gradient(9, 8).expect("gradient");
    let mut hsv = rgb.clone();
    convert_rgb_to_hsv(&mut hsv).expect("to hsv");
    rp.compare_values(1.0, (hsv.color_space() == ColorSpace::Hsv) as u8 as f64, 0.0);
    let mut mismatches = 0;
    for (src, dst) in rgb.pixels().zip(hsv.pixels()) {
        let expect = rgb_to_hsv(src[0], src[1], src[2]);
        if [expect.h, expect.s, expect.v] != dst {
            mismatches += 1;
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 2: grays map to the undefined hue and back exactly ---
    for k in [0, 10, 128, 243, 255] {
        let gray = synth::uniform_rgb(4, 3, [k, k, k]).expect("gray");
        let mut store = gray.clone();
        convert_rgb_to_hsv(&mut store).expect("to hsv");
        let px = store.pixel(2, 1).expect("pixel");
        rp.compare_values(HUE_UNDEFINED as f64, px[0] as f64, 0.0);
        rp.compare_values(0.0, px[1] as f64, 0.0);
        rp.compare_values((4 * k) as f64, px[2] as f64, 0.0);
        convert_hsv_to_rgb(&mut store).expect("to rgb");
        rp.compare_stores(&gray, &store);
    }

    // --- Test 3: saturated checkerboard survives the roundtrip ---
    let board = synth::checkerboard(6, 6, 1, [255, 0, 0], [0, 255, 255]).expect("board");
    let mut store = board.clone();
    convert_rgb_to_hsv(&mut store).expect("to hsv");
    rp.compare_values(0.0, store.pixel(0, 0).expect("pixel")[0] as f64, 0.0);
    rp.compare_values(180.0, store.pixel(1, 0).expect("pixel")[0] as f64, 0.0);
    convert_hsv_to_rgb(&mut store).expect("to rgb");
    rp.compare_stores(&board, &store);

    assert!(rp.cleanup(), "colorspace regression test failed");
}
