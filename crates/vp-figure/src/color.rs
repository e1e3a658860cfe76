/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Scales HLS saturation by `prop`.
    pub fn desaturate(self, prop: f64) -> Rgb {
        let (h, l, s) = self.to_hls();
        Rgb::from_hls(h, l, s * prop.clamp(0.0, 1.0))
    }

    fn to_hls(self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let l = (minc + maxc) / 2.0;
        if maxc == minc {
            return (0.0, l, 0.0);
        }
        let span = maxc - minc;
        let s = if l <= 0.5 {
            span / (maxc + minc)
        } else {
            span / (2.0 - maxc - minc)
        };
        let rc = (maxc - r) / span;
        let gc = (maxc - g) / span;
        let bc = (maxc - b) / span;
        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        ((h / 6.0).rem_euclid(1.0), l, s)
    }

    fn from_hls(h: f64, l: f64, s: f64) -> Rgb {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if s == 0.0 {
            return Rgb::new(to_u8(l), to_u8(l), to_u8(l));
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Rgb::new(
            to_u8(hue_channel(m1, m2, h + 1.0 / 3.0)),
            to_u8(hue_channel(m1, m2, h)),
            to_u8(hue_channel(m1, m2, h - 1.0 / 3.0)),
        )
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
