use super::ImageDescriber;
use crate::upload::IMAGE_EXTENSIONS;
use crate::utils::file_size::human_size;
use eframe::egui::{self, RichText};
use rfd::FileDialog;

const FORM_HEADING: &str = "Describe Image with AI";
const RESULT_HEADING: &str = "Description";

impl ImageDescriber {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading(FORM_HEADING);
            });

            ui.add_space(20.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("🖼 Select Image").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Images", IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.select_file(path);
                        }
                    }
                    if let Some(image) = &self.state.selected {
                        ui.label(format!("Selected: {}", image.name));
                        if let Some(size) = image.size {
                            ui.label(
                                RichText::new(human_size(size))
                                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
                            );
                        }
                    }
                });
            });

            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                ui.add_enabled_ui(self.state.can_submit(), |ui| {
                    let button = egui::Button::new(self.state.submit_label())
                        .min_size(egui::vec2(200.0, 40.0));
                    if ui.add(button).clicked() {
                        self.submit();
                    }
                });
            });

            ui.add_space(20.0);

            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.heading(RESULT_HEADING);
                ui.add_space(8.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(self.state.description.as_str());
                });
            });
        });
    }
}
