//! End-to-end pipeline regression test
//!
//! Runs the full enhancement on synthetic images and checks every output
//! sample, then drives the file-level entry point through a PPM on disk.

use derby::io::{ImageFormat, read_image, read_image_mem, write_image, write_image_mem};
use derby::{ColorSpace, ImageStore, enhance, run};
use derby_test::{RegParams, regout_path, synth};

const A: [i32; 3] = [200, 40, 60];
const B: [i32; 3] = [30, 180, 220];

const BOARD_10X9: [[[i32; 3]; 10]; 9] = [
    [
        [207, 32, 52], [207, 32, 52], [21, 183, 229], [21, 183, 229], [207, 32, 52],
        [207, 32, 52], [21, 183, 229], [21, 183, 229], [207, 32, 52], [207, 32, 52],
    ],
    [
        [207, 32, 52], [207, 32, 52], [21, 183, 229], [21, 183, 229], [207, 32, 52],
        [207, 32, 52], [21, 183, 229], [21, 183, 229], [207, 32, 52], [207, 32, 52],
    ],
    [
        [21, 183, 229], [21, 183, 229], [207, 32, 52], [207, 32, 52], [21, 183, 229],
        [21, 183, 229], [207, 32, 52], [207, 32, 52], [21, 183, 229], [21, 183, 229],
    ],
    [
        [205, 255, 2], [205, 255, 2], [181, 42, 44], [200, 35, 37], [16, 236, 155],
        [16, 236, 155], [200, 35, 37], [181, 42, 44], [205, 255, 2], [205, 255, 2],
    ],
    [
        [181, 42, 44], [181, 42, 44], [205, 255, 2], [16, 236, 155], [200, 35, 37],
        [200, 35, 37], [16, 236, 155], [205, 255, 2], [181, 42, 44], [181, 42, 44],
    ],
    [
        [181, 42, 44], [181, 42, 44], [205, 255, 2], [16, 236, 155], [200, 35, 37],
        [200, 35, 37], [16, 236, 155], [205, 255, 2], [181, 42, 44], [181, 42, 44],
    ],
    [
        [21, 183, 229], [21, 183, 229], [207, 32, 52], [207, 32, 52], [21, 183, 229],
        [21, 183, 229], [207, 32, 52], [207, 32, 52], [21, 183, 229], [21, 183, 229],
    ],
    [
        [21, 183, 229], [21, 183, 229], [207, 32, 52], [207, 32, 52], [21, 183, 229],
        [21, 183, 229], [207, 32, 52], [207, 32, 52], [21, 183, 229], [21, 183, 229],
    ],
    [
        [207, 32, 52], [207, 32, 52], [21, 183, 229], [21, 183, 229], [207, 32, 52],
        [207, 32, 52], [21, 183, 229], [21, 183, 229], [207, 32, 52], [207, 32, 52],
    ],
];

const GRADIENT_9X8: [[[i32; 3]; 9]; 8] = [
    [
        [0, 0, 0], [29, 0, 0], [70, 0, 0], [110, 3, 0], [151, 8, 6],
        [191, 16, 16], [232, 21, 24], [0, 26, 42], [32, 32, 59],
    ],
    [
        [0, 47, 0], [40, 52, 0], [82, 57, 0], [122, 62, 2], [163, 65, 9],
        [203, 71, 19], [244, 77, 31], [4, 85, 44], [44, 90, 61],
    ],
    [
        [12, 105, 0], [51, 110, 0], [92, 116, 0], [134, 118, 5], [175, 123, 13],
        [215, 131, 22], [255, 134, 35], [16, 143, 47], [56, 148, 63],
    ],
    [
        [85, 197, 0], [115, 197, 0], [96, 195, 3], [144, 179, 8], [177, 158, 17],
        [229, 164, 34], [255, 164, 66], [44, 251, 17], [127, 255, 72],
    ],
    [
        [255, 183, 1], [255, 157, 0], [4, 255, 0], [176, 255, 4], [255, 202, 9],
        [255, 149, 0], [0, 255, 81], [213, 255, 0], [255, 243, 10],
    ],
    [
        [49, 0, 4], [89, 4, 5], [130, 9, 9], [170, 15, 15], [211, 20, 23],
        [251, 26, 29], [12, 30, 44], [51, 37, 59], [93, 42, 74],
    ],
    [
        [61, 55, 8], [101, 61, 9], [142, 66, 13], [182, 72, 18], [223, 75, 26],
        [255, 83, 36], [24, 89, 47], [63, 95, 62], [105, 99, 78],
    ],
    [
        [71, 114, 12], [112, 120, 13], [154, 124, 16], [194, 130, 21], [235, 135, 29],
        [0, 142, 37], [36, 147, 50], [75, 153, 65], [116, 158, 82],
    ],
];

fn compare_rows<const W: usize>(
    rp: &mut RegParams,
    expected: &[[[i32; 3]; W]],
    store: &ImageStore,
) {
    let mut mismatches = 0;
    for (y, row) in expected.iter().enumerate() {
        for (x, want) in row.iter().enumerate() {
            let got = store.pixel(x as u32, y as u32);
            if got != Some(*want) {
                eprintln!("pixel ({x}, {y}): expected {want:?}, got {got:?}");
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // --- Test 1: a 4x4 image is too small to sharpen ---
    let mut small = synth::checkerboard(4, 4, 1, A, B).expect("small");
    enhance(&mut small).expect("enhance");
    rp.compare_values(1.0, (small.color_space() == ColorSpace::Rgb) as u8 as f64, 0.0);
    let expected = synth::checkerboard(4, 4, 1, [207, 32, 52], [21, 183, 229]).expect("expected");
    rp.compare_stores(&expected, &small);

    // --- Test 2: 10x9 checkerboard, sharpened rows 3 to 5 ---
    let mut board = synth::checkerboard(10, 9, 2, A, B).expect("board");
    enhance(&mut board).expect("enhance");
    compare_rows(&mut rp, &BOARD_10X9[..], &board);

    // --- Test 3: 9x8 gradient ---
    let mut gradient = synth::gradient(9, 8).expect("gradient");
    enhance(&mut gradient).expect("enhance");
    compare_rows(&mut rp, &GRADIENT_9X8[..], &gradient);

    // --- Test 4: file entry point matches the in-memory pipeline ---
    let input = regout_path("pipeline_input.ppm").expect("regout");
    let output = regout_path("pipeline_output.ppm").expect("regout");
    write_image(&synth::gradient(9, 8).expect("gradient"), &input, ImageFormat::Pnm)
        .expect("write input");
    run(&input, &output).expect("run");
    let written = read_image(&output).expect("read output");
    rp.compare_stores(&gradient, &written);
    let bytes = write_image_mem(&gradient, ImageFormat::Pnm).expect("encode");
    rp.compare_strings(&bytes, &std::fs::read(&output).expect("read bytes"));

    // --- Test 5: the pipeline is deterministic ---
    let encoded = write_image_mem(&synth::gradient(9, 8).expect("gradient"), ImageFormat::Pnm)
        .expect("encode");
    let mut again = read_image_mem(&encoded).expect("decode");
    enhance(&mut again).expect("enhance");
    rp.compare_stores(&gradient, &again);

    // --- Test 6: oversized input is rejected ---
    rp.compare_values(
        1.0,
        ImageStore::new(732, 10, ColorSpace::Rgb).is_err() as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}
