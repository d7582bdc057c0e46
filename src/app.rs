use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use life_timeline::io::read_events_file;
use life_timeline::model::resolve_events;
use life_timeline::{Event, TimelineConfig, Viewport};

use crate::ui;

/// Main application state. Only the zoom factor and canvas size carry over
/// between frames; the timeline itself is re-rendered every frame.
pub struct TimelineApp {
    pub config: TimelineConfig,
    pub events: Vec<Event>,
    pub viewport: Viewport,
    /// File the events came from, if any.
    pub source: Option<PathBuf>,

    // Dialog state
    pub show_add_event: bool,
    pub show_about: bool,
    pub new_event_label: String,
    pub new_event_date: NaiveDate,

    // Status message
    pub status_message: String,
}

impl TimelineApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: TimelineConfig,
        events: Vec<Event>,
        source: Option<PathBuf>,
    ) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        let status_message = format!("{} event(s) plotted", events.len());
        Self {
            config,
            events,
            viewport: Viewport::default(),
            source,
            show_add_event: false,
            show_about: false,
            new_event_label: String::new(),
            new_event_date: chrono::Local::now().date_naive(),
            status_message,
        }
    }

    // --- File operations ---

    pub fn open_events_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Event list", &["txt"])
            .pick_file()
        {
            self.load_events_file(&path);
        }
    }

    /// Replace the plotted events with the contents of `path`. Keeps the
    /// current events if the file has nothing usable.
    pub fn load_events_file(&mut self, path: &Path) {
        let report = match read_events_file(path) {
            Ok(report) => report,
            Err(e) => {
                log::error!("{}", e);
                self.status_message = format!("Error loading: {}", e);
                return;
            }
        };
        let skipped = report.skipped.len();
        let (events, dropped) = resolve_events(&self.config, report.entries);

        if events.is_empty() {
            self.status_message = format!(
                "No valid events in {} ({} lines skipped, {} events out of range)",
                path.display(),
                skipped,
                dropped
            );
            return;
        }

        let count = events.len();
        self.events = events;
        self.source = Some(path.to_path_buf());
        self.status_message = if skipped + dropped > 0 {
            format!(
                "Loaded {} events ({} lines skipped, {} events out of range)",
                count, skipped, dropped
            )
        } else {
            format!("Loaded {} events", count)
        };
    }

    // --- Event operations ---

    pub fn add_event_from_dialog(&mut self) {
        let label = self.new_event_label.trim().to_string();
        match Event::new(&self.config, self.new_event_date, label) {
            Ok(event) => {
                self.status_message = format!(
                    "Added event at age {:.2} (row {})",
                    event.age, event.row
                );
                self.events.push(event);
                self.new_event_label.clear();
            }
            Err(e) => {
                log::warn!("Rejected new event: {}", e);
                self.status_message = format!("Event not added: {}", e);
            }
        }
    }

    // --- View ---

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in(&self.config);
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out(&self.config);
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// "Row: 30 cm = 1134 px (Zoom: 1.00)"
    fn scale_summary(&self) -> String {
        format!(
            "Row: {} = {:.0} px (Zoom: {:.2})",
            life_timeline::render::legend::format_cm(self.config.scale_length_cm),
            self.viewport.row_length_px(&self.config),
            self.viewport.zoom_factor
        )
    }
}

impl eframe::App for TimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_STATUS)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.scale_summary())
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(" · ")
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_DIM),
                    );
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Events: {}", self.events.len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the timeline
        egui::CentralPanel::default()
            .frame(egui::Frame::default().inner_margin(egui::Margin::ZERO))
            .show(ctx, |ui| {
                ui::canvas::show_timeline_canvas(
                    &self.config,
                    &self.events,
                    &mut self.viewport,
                    ui,
                );
            });

        // Dialogs
        if self.show_add_event {
            ui::dialogs::show_add_event_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
