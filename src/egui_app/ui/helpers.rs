use super::style;
use crate::egui_app::controller::ExitTrigger;
use eframe::egui::{self, Align2, Color32, TextStyle, Ui};

pub(super) fn clamp_label_for_width(text: &str, available_width: f32) -> String {
    // Rough character-based truncation to avoid layout thrash.
    let width = available_width.max(1.0);
    let approx_char_width = 8.0;
    let max_chars = (width / approx_char_width).floor().max(6.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut clipped: String = text.chars().take(keep).collect();
    clipped.push_str("...");
    clipped
}

pub(super) struct ListRow<'a> {
    pub label: &'a str,
    pub detail: &'a str,
    pub row_width: f32,
    pub row_height: f32,
    pub selected: bool,
}

pub(super) fn render_list_row(ui: &mut Ui, row: ListRow<'_>) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(row.row_width, row.row_height),
        egui::Sense::click(),
    );
    let palette = style::palette();
    if row.selected {
        ui.painter().rect_filled(rect, 0.0, style::row_selected_fill());
    } else if response.hovered() {
        ui.painter().rect_filled(rect, 0.0, palette.grid_soft);
    }
    ui.painter().line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        egui::Stroke::new(1.0, palette.grid_soft),
    );
    let font_id = TextStyle::Button.resolve(ui.style());
    let padding = ui.spacing().button_padding.x;
    ui.painter().text(
        egui::pos2(rect.left() + padding, rect.center().y),
        Align2::LEFT_CENTER,
        clamp_label_for_width(row.label, rect.width() * 0.6),
        font_id.clone(),
        palette.text_primary,
    );
    ui.painter().text(
        egui::pos2(rect.right() - padding, rect.center().y),
        Align2::RIGHT_CENTER,
        row.detail,
        font_id,
        palette.text_muted,
    );
    response
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum InlineTextEditAction {
    None,
    Submit,
    Cancel,
    FocusLost,
}

impl InlineTextEditAction {
    /// How the edit session should end, if it should.
    pub(super) fn exit_trigger(self) -> Option<ExitTrigger> {
        match self {
            InlineTextEditAction::None => None,
            InlineTextEditAction::Submit => Some(ExitTrigger::Confirm),
            InlineTextEditAction::Cancel => Some(ExitTrigger::Cancel),
            InlineTextEditAction::FocusLost => Some(ExitTrigger::FocusLost),
        }
    }
}

/// Single-line editor that reports how the user left it.
///
/// `value` is edited in place; the caller decides whether the edit sticks.
pub(super) fn render_inline_text_edit(
    ui: &mut Ui,
    width: f32,
    value: &mut String,
    hint: &str,
    focus_requested: &mut bool,
) -> (egui::Response, InlineTextEditAction) {
    let edit = egui::TextEdit::singleline(value)
        .hint_text(hint)
        .text_color(Color32::WHITE)
        .desired_width(width);
    let response = ui.add(edit);
    if *focus_requested && !response.has_focus() {
        response.request_focus();
        *focus_requested = false;
    }
    let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
    let escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));
    let action = if enter_pressed && (response.has_focus() || response.lost_focus()) {
        InlineTextEditAction::Submit
    } else if escape_pressed && (response.has_focus() || response.lost_focus()) {
        InlineTextEditAction::Cancel
    } else if response.lost_focus() {
        InlineTextEditAction::FocusLost
    } else {
        InlineTextEditAction::None
    };
    (response, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_labels_are_clipped_with_ellipsis() {
        assert_eq!(clamp_label_for_width("Button1", 200.0), "Button1");
        let clipped = clamp_label_for_width("AVeryLongWidgetNameIndeed", 64.0);
        assert_eq!(clipped, "AVery...");
    }

    #[test]
    fn edit_actions_map_to_exit_triggers() {
        assert_eq!(InlineTextEditAction::None.exit_trigger(), None);
        assert_eq!(
            InlineTextEditAction::Submit.exit_trigger(),
            Some(ExitTrigger::Confirm)
        );
        assert_eq!(
            InlineTextEditAction::Cancel.exit_trigger(),
            Some(ExitTrigger::Cancel)
        );
        assert_eq!(
            InlineTextEditAction::FocusLost.exit_trigger(),
            Some(ExitTrigger::FocusLost)
        );
    }
}
