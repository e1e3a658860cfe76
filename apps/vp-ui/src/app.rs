use crate::canvas::PlotSurface;
use crate::{fonts, theme};
use egui_file_dialog::FileDialog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use vp_app::{DEFAULT_SAVE_NAME, Notice, Session, Severity};
use vp_figure::Palette;

const CONTROL_PANEL_WIDTH: f32 = 220.0;

pub struct ViolinApp {
    session: Session,
    surface: PlotSurface,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    notice: Option<Notice>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Load,
    Save,
}

fn extension_filter(extensions: &'static [&'static str]) -> Arc<dyn Fn(&Path) -> bool + Send + Sync> {
    Arc::new(move |path: &Path| {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)))
    })
}

impl ViolinApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply(&cc.egui_ctx);
        fonts::setup(&cc.egui_ctx);

        let file_dialog = FileDialog::new()
            .add_file_filter("CSV files (*.csv)", extension_filter(&["csv"]))
            .add_file_filter("PNG image (*.png)", extension_filter(&["png"]))
            .add_file_filter("SVG image (*.svg)", extension_filter(&["svg"]))
            .add_file_filter("JPEG image (*.jpg)", extension_filter(&["jpg", "jpeg"]))
            .add_file_filter("PDF (*.pdf)", extension_filter(&["pdf"]))
            .default_file_name(DEFAULT_SAVE_NAME);

        Self {
            session: Session::new(),
            surface: PlotSurface::default(),
            file_dialog,
            file_dialog_action: None,
            notice: None,
        }
    }

    fn load_dataset(&mut self, path: PathBuf) {
        self.notice = Some(match self.session.load_csv(&path) {
            Ok(summary) => summary.notice(),
            Err(err) => Notice::from(&err),
        });
    }

    fn generate_plot(&mut self) {
        if let Err(err) = self.session.generate() {
            self.notice = Some(Notice::from(&err));
        }
    }

    fn save_plot(&mut self, path: PathBuf) {
        self.notice = Some(match self.session.save(&path) {
            Ok(written) => Notice::info(format!("Saved the plot to '{}'.", written.display())),
            Err(err) => Notice::from(&err),
        });
    }

    fn open_dialog(&mut self, action: FileDialogAction) {
        self.file_dialog_action = Some(action);
        match action {
            FileDialogAction::Load => self.file_dialog.select_file(),
            FileDialogAction::Save => self.file_dialog.save_file(),
        }
    }

    fn control_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.add_space(6.0);

        let full = [ui.available_width(), 0.0];
        if ui.add_sized(full, egui::Button::new("Load CSV file")).clicked() {
            self.open_dialog(FileDialogAction::Load);
        }

        let columns = self.session.columns().to_vec();
        ui.add_space(10.0);
        ui.label("X axis (category):");
        column_combo(ui, "x_column", &mut self.session.selection.x, &columns);
        ui.add_space(5.0);
        ui.label("Y axis (value):");
        column_combo(ui, "y_column", &mut self.session.selection.y, &columns);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label("Plot title:");
        ui.add(egui::TextEdit::singleline(&mut self.session.options.title).desired_width(f32::INFINITY));
        ui.add_space(10.0);
        ui.label("Color palette:");
        let palette = &mut self.session.options.palette;
        egui::ComboBox::from_id_salt("palette")
            .width(ui.available_width())
            .selected_text(palette.name())
            .show_ui(ui, |ui| {
                for choice in Palette::ALL {
                    ui.selectable_value(palette, choice, choice.name());
                }
            });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.checkbox(&mut self.session.options.show_box, "Show box plot");
        ui.checkbox(&mut self.session.options.show_points, "Show data points (jitter)");

        ui.add_space(20.0);
        if ui.add_sized(full, egui::Button::new("Generate plot")).clicked() {
            self.generate_plot();
        }
        ui.add_space(5.0);
        if ui
            .add_enabled(self.session.can_save(), egui::Button::new("Save plot").min_size(full.into()))
            .clicked()
        {
            self.open_dialog(FileDialogAction::Save);
        }
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let accent = match notice.severity {
            Severity::Info => theme::ACCENT,
            Severity::Warning => egui::Color32::from_rgb(0xE0, 0xB0, 0x40),
            Severity::Error => egui::Color32::from_rgb(0xE0, 0x60, 0x60),
        };

        let mut dismissed = false;
        egui::Window::new(egui::RichText::new(&notice.title).color(accent))
            .id(egui::Id::new("notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.notice = None;
        }
    }
}

fn column_combo(ui: &mut egui::Ui, id: &str, selected: &mut String, columns: &[String]) {
    egui::ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(selected.as_str())
        .show_ui(ui, |ui| {
            for name in columns {
                ui.selectable_value(selected, name.clone(), name);
            }
        });
}

impl eframe::App for ViolinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::Load) => self.load_dataset(path.to_path_buf()),
                Some(FileDialogAction::Save) => self.save_plot(path.to_path_buf()),
                None => {}
            }
        }

        let blocked = self.notice.is_some();

        egui::SidePanel::left("control_panel")
            .resizable(false)
            .exact_width(CONTROL_PANEL_WIDTH)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(theme::CONTROL_BG)
                    .stroke(egui::Stroke::new(1.0, theme::BORDER))
                    .inner_margin(10.0),
            )
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.control_panel(ui));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(theme::PANEL_BG))
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| self.surface.show(ui, self.session.axes()));
            });

        self.notice_window(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_match_extensions_case_insensitively() {
        let csv = extension_filter(&["csv"]);
        assert!(csv(Path::new("data.csv")));
        assert!(csv(Path::new("DATA.CSV")));
        assert!(!csv(Path::new("data.txt")));
        assert!(!csv(Path::new("data")));

        let jpeg = extension_filter(&["jpg", "jpeg"]);
        assert!(jpeg(Path::new("a.jpeg")));
        assert!(jpeg(Path::new("a.JPG")));

        let pdf = extension_filter(&["pdf"]);
        assert!(pdf(Path::new("plot.pdf")));
        assert!(!pdf(Path::new("plot.svg")));
    }
}
