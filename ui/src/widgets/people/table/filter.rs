use egui::{ComboBox, TextEdit, Ui};
use holocron_business::{
    ColumnFilter, ColumnKey, NumberFilter, NumberOperator, TextFilter, TextOperator,
};

const HINT: &str = "Filter…";

/// Operator picker plus value input(s) for one column. Edits apply immediately.
pub fn filter_editor(ui: &mut Ui, key: ColumnKey, filter: &mut ColumnFilter) {
    match filter {
        ColumnFilter::Text(filter) => text_filter_editor(ui, key, filter),
        ColumnFilter::Number(filter) => number_filter_editor(ui, key, filter),
    }
}

fn text_filter_editor(ui: &mut Ui, key: ColumnKey, filter: &mut TextFilter) {
    ComboBox::from_id_salt(("people_filter_op", key))
        .width(ui.available_width())
        .selected_text(filter.operator.label())
        .show_ui(ui, |ui| {
            for operator in TextOperator::ALL {
                ui.selectable_value(&mut filter.operator, operator, operator.label());
            }
        });

    if filter.operator.takes_value() {
        ui.add(
            TextEdit::singleline(&mut filter.value)
                .id_salt(("people_filter_value", key))
                .hint_text(HINT)
                .desired_width(f32::INFINITY),
        );
    }
}

fn number_filter_editor(ui: &mut Ui, key: ColumnKey, filter: &mut NumberFilter) {
    ComboBox::from_id_salt(("people_filter_op", key))
        .width(ui.available_width())
        .selected_text(filter.operator.label())
        .show_ui(ui, |ui| {
            for operator in NumberOperator::ALL {
                ui.selectable_value(&mut filter.operator, operator, operator.label());
            }
        });

    if filter.operator.takes_value() {
        let hint = if filter.operator.takes_second_value() {
            "From"
        } else {
            HINT
        };
        ui.add(
            TextEdit::singleline(&mut filter.value)
                .id_salt(("people_filter_value", key))
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        );
    }

    if filter.operator.takes_second_value() {
        ui.add(
            TextEdit::singleline(&mut filter.value_to)
                .id_salt(("people_filter_value_to", key))
                .hint_text("To")
                .desired_width(f32::INFINITY),
        );
    }
}
