use std::fmt;

use crate::color::Rgb;

const DEEP: [u32; 10] = [
    0x4C72B0, 0xDD8452, 0x55A868, 0xC44E52, 0x8172B3, 0x937860, 0xDA8BC3, 0x8C8C8C, 0xCCB974,
    0x64B5CD,
];
const MUTED: [u32; 10] = [
    0x4878D0, 0xEE854A, 0x6ACC64, 0xD65F5F, 0x956CB4, 0x8C613C, 0xDC7EC0, 0x797979, 0xD5BB67,
    0x82C6E2,
];
const PASTEL: [u32; 10] = [
    0xA1C9F4, 0xFFB482, 0x8DE5A1, 0xFF9F9B, 0xD0BBFF, 0xDEBB9B, 0xFAB0E4, 0xCFCFCF, 0xFFFEA3,
    0xB9F2F0,
];
const COLORBLIND: [u32; 10] = [
    0x0173B2, 0xDE8F05, 0x029E73, 0xD55E00, 0xCC78BC, 0xCA9161, 0xFBAFE4, 0x949494, 0xECE133,
    0x56B4E9,
];

// Colormap stops, evenly spaced over [0, 1].
const VIRIDIS: [u32; 10] = [
    0x440154, 0x482878, 0x3E4989, 0x31688E, 0x26828E, 0x1F9E89, 0x35B779, 0x6ECE58, 0xB5DE2B,
    0xFDE725,
];
const MAGMA: [u32; 10] = [
    0x000004, 0x180F3D, 0x440F76, 0x721F81, 0x9E2F7F, 0xCD4071, 0xF1605D, 0xFD9668, 0xFECA8D,
    0xFCFDBF,
];
const ROCKET: [u32; 8] = [
    0x03051A, 0x36193E, 0x701F57, 0xAE1759, 0xE13342, 0xF37651, 0xF6B48E, 0xFAEBDD,
];
const CREST: [u32; 8] = [
    0xA5CD90, 0x79B993, 0x57A396, 0x3F8D96, 0x2F7694, 0x2A5E8F, 0x2C4584, 0x2C3172,
];
const BLUES: [u32; 9] = [
    0xF7FBFF, 0xDEEBF7, 0xC6DBEF, 0x9ECAE1, 0x6BAED6, 0x4292C6, 0x2171B5, 0x08519C, 0x08306B,
];
const GREENS: [u32; 9] = [
    0xF7FCF5, 0xE5F5E0, 0xC7E9C0, 0xA1D99B, 0x74C476, 0x41AB5D, 0x238B45, 0x006D2C, 0x00441B,
];

/// Named color palettes offered in the palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Pastel,
    Muted,
    Deep,
    Colorblind,
    Viridis,
    Rocket,
    Crest,
    Magma,
    Blues,
    Greens,
}

enum Scheme {
    /// Fixed colors, cycled when there are more categories.
    Qualitative(&'static [u32]),
    /// Continuous map sampled evenly, excluding both ends.
    Colormap(&'static [u32]),
}

impl Palette {
    pub const ALL: [Palette; 10] = [
        Palette::Pastel,
        Palette::Muted,
        Palette::Deep,
        Palette::Colorblind,
        Palette::Viridis,
        Palette::Rocket,
        Palette::Crest,
        Palette::Magma,
        Palette::Blues,
        Palette::Greens,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Palette::Pastel => "pastel",
            Palette::Muted => "muted",
            Palette::Deep => "deep",
            Palette::Colorblind => "colorblind",
            Palette::Viridis => "viridis",
            Palette::Rocket => "rocket",
            Palette::Crest => "crest",
            Palette::Magma => "magma",
            Palette::Blues => "Blues",
            Palette::Greens => "Greens",
        }
    }

    fn scheme(self) -> Scheme {
        match self {
            Palette::Pastel => Scheme::Qualitative(&PASTEL),
            Palette::Muted => Scheme::Qualitative(&MUTED),
            Palette::Deep => Scheme::Qualitative(&DEEP),
            Palette::Colorblind => Scheme::Qualitative(&COLORBLIND),
            Palette::Viridis => Scheme::Colormap(&VIRIDIS),
            Palette::Rocket => Scheme::Colormap(&ROCKET),
            Palette::Crest => Scheme::Colormap(&CREST),
            Palette::Magma => Scheme::Colormap(&MAGMA),
            Palette::Blues => Scheme::Colormap(&BLUES),
            Palette::Greens => Scheme::Colormap(&GREENS),
        }
    }

    /// One color per category, in category order.
    pub fn colors(self, n: usize) -> Vec<Rgb> {
        match self.scheme() {
            Scheme::Qualitative(table) => (0..n).map(|i| Rgb::from_hex(table[i % table.len()])).collect(),
            Scheme::Colormap(stops) => (0..n)
                .map(|i| sample_colormap(stops, (i + 1) as f64 / (n + 1) as f64))
                .collect(),
        }
    }
}

fn sample_colormap(stops: &[u32], t: f64) -> Rgb {
    let segments = (stops.len() - 1) as f64;
    let pos = t.clamp(0.0, 1.0) * segments;
    let lo = (pos.floor() as usize).min(stops.len() - 2);
    Rgb::from_hex(stops[lo]).lerp(Rgb::from_hex(stops[lo + 1]), pos - lo as f64)
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
