use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use egui::{FontData, FontDefinitions, FontFamily};

/// A font family name and the files it usually lives in.
#[derive(Debug, Clone, Copy)]
pub struct FontCandidate {
    pub family: &'static str,
    pub paths: &'static [&'static str],
}

const WINDOWS_FONTS: &[FontCandidate] = &[
    FontCandidate {
        family: "Meiryo",
        paths: &[r"C:\Windows\Fonts\meiryo.ttc"],
    },
    FontCandidate {
        family: "Yu Gothic",
        paths: &[r"C:\Windows\Fonts\YuGothM.ttc", r"C:\Windows\Fonts\yugothic.ttf"],
    },
    FontCandidate {
        family: "MS Gothic",
        paths: &[r"C:\Windows\Fonts\msgothic.ttc"],
    },
];

const MACOS_FONTS: &[FontCandidate] = &[
    FontCandidate {
        family: "Hiragino Sans",
        paths: &[
            "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
            "/System/Library/Fonts/Hiragino Sans W3.ttc",
        ],
    },
    FontCandidate {
        family: "Hiragino Maru Gothic ProN",
        paths: &[
            "/System/Library/Fonts/ヒラギノ丸ゴ ProN W4.ttc",
            "/Library/Fonts/Hiragino Maru Gothic ProN W4.ttc",
        ],
    },
];

const OTHER_FONTS: &[FontCandidate] = &[
    FontCandidate {
        family: "IPAexGothic",
        paths: &[
            "/usr/share/fonts/opentype/ipaexfont-gothic/ipaexg.ttf",
            "/usr/share/fonts/truetype/ipaexfont-gothic/ipaexg.ttf",
            "/usr/share/fonts/ipa-ex-gothic/ipaexg.ttf",
        ],
    },
    FontCandidate {
        family: "Noto Sans CJK JP",
        paths: &[
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
        ],
    },
];

/// Preference list for an OS as named by `std::env::consts::OS`.
pub fn candidates_for(os: &str) -> &'static [FontCandidate] {
    match os {
        "windows" => WINDOWS_FONTS,
        "macos" => MACOS_FONTS,
        _ => OTHER_FONTS,
    }
}

/// First candidate with an existing file, in preference order.
pub fn probe(
    candidates: &[FontCandidate],
    exists: impl Fn(&Path) -> bool,
) -> Option<(&'static str, PathBuf)> {
    candidates.iter().find_map(|c| {
        c.paths
            .iter()
            .map(Path::new)
            .find(|p| exists(p))
            .map(|p| (c.family, p.to_path_buf()))
    })
}

/// The font found at startup, if any.
#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub family: &'static str,
    pub bytes: Vec<u8>,
}

static PROBED: OnceLock<Option<LoadedFont>> = OnceLock::new();

fn probe_host() -> Option<LoadedFont> {
    let (family, path) = probe(candidates_for(std::env::consts::OS), Path::exists)?;
    match std::fs::read(&path) {
        Ok(bytes) => Some(LoadedFont { family, bytes }),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "font file unreadable");
            None
        }
    }
}

/// Puts `font` first in both egui families.
pub fn install_into(fonts: &mut FontDefinitions, font: &LoadedFont) {
    let key = font.family.to_owned();
    fonts
        .font_data
        .insert(key.clone(), FontData::from_owned(font.bytes.clone()));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().insert(0, key.clone());
    }
}

/// Probes the host once and installs the found font for the UI and for
/// exported figures. Later calls reuse the first probe.
pub fn setup(ctx: &egui::Context) {
    let mut first = false;
    let found = PROBED.get_or_init(|| {
        first = true;
        probe_host()
    });

    match found {
        Some(font) => {
            let mut fonts = FontDefinitions::default();
            install_into(&mut fonts, font);
            ctx.set_fonts(fonts);
            vp_figure::set_font_family(font.family);
            if first {
                tracing::info!(family = font.family, "using CJK font");
            }
        }
        None => {
            if first {
                tracing::warn!("no CJK font found; keeping default fonts");
            }
        }
    }
}
