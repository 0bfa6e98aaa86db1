pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// 0xRRGGBB to [0, 1] components
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Scale a colour by a light intensity and pack it as opaque RGBA8
pub fn shade(color: [f32; 3], intensity: f32) -> [u8; 4] {
    let channel = |c: f32| ((c * intensity).clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(color[0]), channel(color[1]), channel(color[2]), 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let rgb = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hex_to_rgb_sky() {
        let rgb = hex_to_rgb(0x6eddff);
        assert!((rgb[0] - 110.0 / 255.0).abs() < 1e-6);
        assert!((rgb[1] - 221.0 / 255.0).abs() < 1e-6);
        assert_eq!(rgb[2], 1.0);
    }

    #[test]
    fn test_shade_clamps() {
        assert_eq!(shade([1.0, 0.5, 0.0], 1.0), [255, 128, 0, 255]);
        assert_eq!(shade([1.0, 1.0, 1.0], 2.0), [255, 255, 255, 255]);
        assert_eq!(shade([1.0, 1.0, 1.0], 0.0), [0, 0, 0, 255]);
    }
}
