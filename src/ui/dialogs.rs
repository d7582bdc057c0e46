use crate::app::TimelineApp;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};

/// Render the "Add Event" dialog.
pub fn show_add_event_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut should_close = false;
    Window::new(RichText::new("Add Event").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);

            egui::Grid::new("add_event_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Label").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [200.0, 24.0],
                        egui::TextEdit::singleline(&mut app.new_event_label)
                            .hint_text("Event name..."),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Date").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut app.new_event_date)
                            .id_salt("dlg_dp_event"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let add_btn = egui::Button::new(RichText::new("Add").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], add_btn).clicked() {
                    app.add_event_from_dialog();
                    should_close = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_add_event = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut TimelineApp, ctx: &Context) {
    let mut open = app.show_about;
    Window::new("About")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading("Life Timeline");
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(6.0);
            ui.label(format!(
                "One row per year of age, {} rows. Each row is {} long at zoom 1.00.",
                app.config.row_count,
                life_timeline::render::legend::format_cm(app.config.scale_length_cm)
            ));
            ui.label("Even rows run left to right, odd rows right to left.");
            ui.label(
                RichText::new("Scroll over the timeline to zoom. Drag the scroll bar to move.")
                    .color(theme::TEXT_DIM),
            );
        });
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        open = false;
    }
    app.show_about = open;
}
