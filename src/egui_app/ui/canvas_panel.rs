use super::EguiApp;
use super::helpers::{ListRow, render_list_row};
use super::style;
use crate::widgets::WidgetType;
use eframe::egui::{self, RichText, Ui};

const ROW_HEIGHT: f32 = 26.0;

impl EguiApp {
    pub(super) fn render_canvas_panel(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Widgets").strong());
        ui.add_space(6.0);
        let rows = self.controller.ui.canvas.rows.clone();
        let selected = self.controller.ui.canvas.selected.clone();
        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("canvas_widgets_scroll")
            .max_height((ui.available_height() - 140.0).max(80.0))
            .show(ui, |ui| {
                for row in &rows {
                    ui.push_id(row.id.as_str(), |ui| {
                        let response = render_list_row(
                            ui,
                            ListRow {
                                label: &row.name,
                                detail: row.widget_type.name_prefix(),
                                row_width: ui.available_width(),
                                row_height: ROW_HEIGHT,
                                selected: selected.as_ref() == Some(&row.id),
                            },
                        );
                        if response.clicked() {
                            clicked = Some(row.id.clone());
                        }
                    });
                }
            });
        if let Some(widget_id) = clicked {
            let _ = self.controller.select_widget(&widget_id);
        }
        ui.separator();
        ui.label(RichText::new("Add widget").color(style::palette().text_muted));
        ui.horizontal_wrapped(|ui| {
            for widget_type in WidgetType::ALL {
                if ui.button(widget_type.name_prefix()).clicked() {
                    self.controller.add_widget(widget_type);
                }
            }
        });
    }
}
