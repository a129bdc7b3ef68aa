//! Just enough color math to derive theme variables: HSL channels, darkening
//! and mixing toward black or white.

use csscolorparser::Color;

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// sRGB channels in `0.0..=255.0`.
pub type Rgb = [f64; 3];

pub const BLACK: Rgb = [0.0, 0.0, 0.0];
pub const WHITE: Rgb = [255.0, 255.0, 255.0];

pub fn parse_rgb(value: &str) -> Option<Rgb> {
    let parsed: Color = value.trim().parse().ok()?;
    let channels = parsed.to_rgba8();
    Some([
        f64::from(channels[0]),
        f64::from(channels[1]),
        f64::from(channels[2]),
    ])
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.map(|channel| channel / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Lower lightness by `amount` (0.07 = 7 percentage points).
pub fn darken(rgb: Rgb, amount: f64) -> Hsl {
    let hsl = rgb_to_hsl(rgb);
    Hsl {
        l: (hsl.l - amount * 100.0).clamp(0.0, 100.0),
        ..hsl
    }
}

/// Perceived brightness below one half.
pub fn is_dark(rgb: Rgb) -> bool {
    let [r, g, b] = rgb;
    (r * 299.0 + g * 587.0 + b * 114.0) / 1000.0 / 255.0 < 0.5
}

/// Linear sRGB mix, `ratio` of the way from `from` to `to`.
pub fn mix(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
    [0, 1, 2].map(|i| from[i] + (to[i] - from[i]) * ratio)
}

/// `H S% L%` channels as used inside `hsl(var(--p) / <alpha-value>)`.
pub fn hsl_channels(hsl: Hsl) -> String {
    format!(
        "{} {}% {}%",
        trim_number(hsl.h, 2),
        trim_number(hsl.s, 3),
        trim_number(hsl.l, 3)
    )
}

fn trim_number(value: f64, digits: usize) -> String {
    let text = format!("{:.*}", digits, value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}
