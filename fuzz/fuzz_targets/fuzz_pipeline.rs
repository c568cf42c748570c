#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::{Pixel, PixelGrid, TransformSpec};

// First two bytes pick dimensions, the rest drive a transform pipeline over
// a small noise grid. Parse rejections are fine; panics are not.
fuzz_target!(|data: &[u8]| {
    let [w, h, rest @ ..] = data else { return };
    let width = u32::from(*w % 16) + 1;
    let height = u32::from(*h % 16) + 1;

    let pixels = (0..width as usize * height as usize)
        .map(|i| {
            let v = rest.get(i % rest.len().max(1)).copied().unwrap_or(0);
            Pixel::new(v, v.wrapping_mul(31), v.wrapping_add(17))
        })
        .collect();
    let Ok(grid) = PixelGrid::from_pixels(width, height, pixels) else {
        return;
    };

    let specs: Vec<TransformSpec> = rest
        .chunks(3)
        .take(4)
        .map(|chunk| {
            let name = match chunk.first().copied().unwrap_or(0) % 6 {
                0 => "greyscale",
                1 => "negative",
                2 => "crop",
                3 => "sharpen",
                4 => "edge",
                _ => "bogus",
            };
            let params = chunk[1..]
                .iter()
                .map(|b| param_string(*b))
                .collect();
            TransformSpec::new(name, params)
        })
        .collect();

    let _ = zenbmp::apply_pipeline(&specs, grid, enough::Unstoppable);
});

fn param_string(b: u8) -> String {
    match b % 4 {
        0 => format!("{}", b),
        1 => format!("{:.2}", f64::from(b) / 255.0),
        2 => "junk".to_string(),
        _ => String::new(),
    }
}
