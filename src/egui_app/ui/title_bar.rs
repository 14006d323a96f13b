use super::EguiApp;
use super::helpers::render_inline_text_edit;
use super::style;
use crate::egui_app::controller::EditMode;
use crate::egui_app::state::TitleBarState;
use eframe::egui::{self, Align, Frame, Layout, Margin, RichText, Ui};

const NAME_EDIT_WIDTH: f32 = 220.0;

impl EguiApp {
    pub(super) fn render_property_pane(&mut self, ui: &mut Ui) {
        let Some(title) = self.controller.ui.title.clone() else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("Select a widget to edit its properties")
                        .color(style::palette().text_muted),
                );
            });
            return;
        };
        Frame::new()
            .fill(style::title_bar_fill())
            .inner_margin(Margin::symmetric(8, 6))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    self.render_title_name(ui, &title);
                    if title.updating {
                        ui.add(egui::Spinner::new().size(14.0));
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.render_title_actions(ui);
                    });
                });
            });
        ui.add_space(12.0);
        ui.label(
            RichText::new(format!("Type: {}", title.widget_type.as_str()))
                .color(style::palette().text_muted),
        );
        ui.label(
            RichText::new(format!("Id: {}", title.widget_id)).color(style::palette().text_muted),
        );
    }

    fn render_title_name(&mut self, ui: &mut Ui, title: &TitleBarState) {
        match title.mode {
            EditMode::Viewing => {
                let response = ui
                    .add(
                        egui::Label::new(RichText::new(&title.name).strong())
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text("Double-click to rename");
                if response.double_clicked() {
                    self.controller.begin_title_edit();
                }
            }
            EditMode::Editing => {
                let mut value = title.name.clone();
                let mut focus_requested = title.focus_requested;
                let (_, action) = render_inline_text_edit(
                    ui,
                    NAME_EDIT_WIDTH,
                    &mut value,
                    &title.placeholder,
                    &mut focus_requested,
                );
                if let Some(state) = self.controller.ui.title.as_mut() {
                    state.focus_requested = focus_requested;
                }
                if value != title.name {
                    self.controller.title_input(&value);
                }
                if let Some(trigger) = action.exit_trigger() {
                    self.controller.finish_title_edit(trigger);
                }
            }
        }
    }

    fn render_title_actions(&mut self, ui: &mut Ui) {
        // Laid out right to left.
        if ui.button("✕").on_hover_text("Close").clicked() {
            self.controller.close_property_pane();
        }
        if ui
            .button("?")
            .on_hover_text("Explore widget related docs")
            .clicked()
        {
            let _ = self.controller.open_widget_help();
        }
        if ui.button("Delete").on_hover_text("Delete Widget").clicked() {
            let _ = self.controller.delete_selected_widget();
        }
        if ui.button("Copy").on_hover_text("Copy Widget").clicked() {
            let _ = self.controller.copy_selected_widget();
        }
    }
}
