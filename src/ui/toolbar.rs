use crate::app::TimelineApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icon;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut TimelineApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  Open Events...", icon::FOLDER_OPEN)).clicked() {
                app.open_events_file();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Quit", icon::SIGN_OUT)).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Events  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  Add Event...", icon::PLUS)).clicked() {
                app.show_add_event = true;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            if ui
                .button(format!("{}  Zoom In        Scroll ↑", icon::MAGNIFYING_GLASS_PLUS))
                .clicked()
            {
                app.zoom_in();
                ui.close_menu();
            }
            if ui
                .button(format!("{}  Zoom Out      Scroll ↓", icon::MAGNIFYING_GLASS_MINUS))
                .clicked()
            {
                app.zoom_out();
                ui.close_menu();
            }
            ui.separator();
            if ui
                .button(format!("{}  Reset Zoom", icon::ARROW_COUNTER_CLOCKWISE))
                .clicked()
            {
                app.reset_zoom();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  About", icon::INFO)).clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned source file
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let source = app
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "single event".to_string());
            ui.label(RichText::new(source).size(11.0).weak());
        });
    });
}
