//! Unsharp mask regression test
//!
//! Builds detail masks for the channels of a levelled, HSV-converted
//! checkerboard and sharpens a plane with a known mask.

use derby_color::convert_rgb_to_hsv;
use derby_core::{Channel, ChannelPlane, ColorSpace};
use derby_filter::{Kernel, SharpenParams, UnsharpMask, levels, sharpen_plane, unsharp_hsv};
use derby_test::{RegParams, synth};

const A: [i32; 3] = [200, 40, 60];
const B: [i32; 3] = [30, 180, 220];

#[test]
fn unsharp_reg() {
    let mut rp = RegParams::new("unsharp");
    let kernel = Kernel::unsharp();

    // --- Test 1: detail masks of a 10x9 checkerboard ---
    let mut store = synth::checkerboard(10, 9, 2, A, B).expect("board");
    levels(&mut store).expect("levels");
    convert_rgb_to_hsv(&mut store).expect("to hsv");

    let mut engine = UnsharpMask::new(&kernel, 10, 9).expect("engine");
    let expected_row4 = [
        (Channel::HUE, [-56, -56, 56, 16, -16, -16, 16, 56, -56, -56]),
        (Channel::SATURATION, [23, 23, -23, -6, 6, 6, -6, -23, 23, 23]),
        (Channel::VALUE, [31, 31, -31, -8, 8, 8, -8, -31, 31, 31]),
    ];
    for (channel, row) in expected_row4 {
        let mask = engine.build(&store.channel(channel)).expect("mask");
        for (x, &want) in row.iter().enumerate() {
            rp.compare_values(want as f64, mask.row(4)[x] as f64, 0.0);
        }
        for y in [0u32, 1, 2, 6, 7, 8] {
            let nonzero = mask.row(y).iter().filter(|&&v| v != 0).count();
            rp.compare_values(0.0, nonzero as f64, 0.0);
        }
    }

    // --- Test 2: sharpening keeps negatives and clamps from above ---
    let mut plane = ChannelPlane::from_data(8, 1, vec![27, 34, 55, 90, 42, 8, 85, 79])
        .expect("plane");
    let mask = ChannelPlane::from_data(8, 1, vec![2, 2, 2, -5, 3, 32, -20, -20]).expect("mask");
    let mut hue = plane.clone();
    sharpen_plane(&mut plane, &mask, SharpenParams::VALUE).expect("sharpen");
    rp.compare_planes(
        &ChannelPlane::from_data(8, 1, vec![26, 33, 54, 91, 41, 7, 91, 85]).expect("plane"),
        &plane,
    );
    sharpen_plane(&mut hue, &mask, SharpenParams::HUE).expect("sharpen");
    rp.compare_planes(
        &ChannelPlane::from_data(8, 1, vec![26, 33, 53, 95, 40, 5, 103, 96]).expect("plane"),
        &hue,
    );

    // --- Test 3: a 4x4 image is too small to sharpen ---
    let mut small = synth::checkerboard(4, 4, 1, A, B).expect("small");
    levels(&mut small).expect("levels");
    convert_rgb_to_hsv(&mut small).expect("to hsv");
    let before = small.clone();
    unsharp_hsv(&mut small, &kernel).expect("unsharp");
    rp.compare_stores(&before, &small);
    rp.compare_values(1.0, (small.color_space() == ColorSpace::Hsv) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "unsharp regression test failed");
}
