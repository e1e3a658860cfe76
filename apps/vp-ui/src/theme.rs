use egui::{Color32, Stroke, Visuals};
use vp_figure::Rgb;

pub const WINDOW_BG: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);
pub const PANEL_BG: Color32 = Color32::from_rgb(0x2E, 0x2E, 0x2E);
pub const CONTROL_BG: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x3A);
pub const ENTRY_BG: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const BUTTON_BG: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const BUTTON_HOVER: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const BORDER: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0x7A, 0xCC);
pub const TEXT: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

pub fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Dark widget colors for the whole window.
pub fn visuals() -> Visuals {
    let mut v = Visuals::dark();
    v.override_text_color = Some(TEXT);
    v.panel_fill = WINDOW_BG;
    v.window_fill = PANEL_BG;
    v.window_stroke = Stroke::new(1.0, BORDER);
    v.extreme_bg_color = ENTRY_BG;
    v.faint_bg_color = CONTROL_BG;
    v.hyperlink_color = ACCENT;
    v.selection.bg_fill = ACCENT;
    v.selection.stroke = Stroke::new(1.0, TEXT);

    v.widgets.noninteractive.bg_fill = CONTROL_BG;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);

    v.widgets.inactive.bg_fill = BUTTON_BG;
    v.widgets.inactive.weak_bg_fill = BUTTON_BG;
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);

    v.widgets.hovered.bg_fill = BUTTON_HOVER;
    v.widgets.hovered.weak_bg_fill = BUTTON_HOVER;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);

    v.widgets.active.bg_fill = ACCENT;
    v.widgets.active.weak_bg_fill = ACCENT;

    v.widgets.open.bg_fill = ENTRY_BG;
    v.widgets.open.weak_bg_fill = ENTRY_BG;
    v
}

pub fn apply(ctx: &egui::Context) {
    ctx.set_visuals(visuals());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_scheme_colors() {
        let v = visuals();
        assert!(v.dark_mode);
        assert_eq!(v.panel_fill, WINDOW_BG);
        assert_eq!(v.widgets.inactive.bg_fill, BUTTON_BG);
        assert_eq!(v.widgets.hovered.bg_fill, BUTTON_HOVER);
        assert_eq!(v.selection.bg_fill, ACCENT);
        assert_eq!(v.override_text_color, Some(TEXT));
    }

    #[test]
    fn plot_colors_convert() {
        assert_eq!(color(Rgb::from_hex(0x3C3C3C)), Color32::from_rgb(60, 60, 60));
        assert_eq!(color(vp_figure::OVERLAY_COLOR), Color32::BLACK);
    }
}
