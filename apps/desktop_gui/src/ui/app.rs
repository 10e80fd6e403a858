use std::time::Duration;

use client_core::{screen, Screen};
use crossbeam_channel::Receiver;
use eframe::egui;

use crate::controller::events::{err_label, UiErrorCategory, UiEvent};
use crate::controller::reducer::{apply_intent, apply_ui_event, AppModel, UserIntent};
use crate::ui::widgets;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct DirectoryApp {
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    search_text: String,
}

impl DirectoryApp {
    pub fn new(ui_rx: Receiver<UiEvent>, model: AppModel) -> Self {
        Self {
            ui_rx,
            model,
            search_text: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model = apply_ui_event(std::mem::take(&mut self.model), event);
        }
    }

    fn apply_intents(&mut self, intents: Vec<UserIntent>) {
        for intent in intents {
            self.model = apply_intent(std::mem::take(&mut self.model), intent);
        }
    }

    fn failure_label(&self) -> &'static str {
        let category = self
            .model
            .load_failure()
            .map(|err| err.category())
            .unwrap_or(UiErrorCategory::Unknown);
        err_label(category)
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut intents = Vec::new();
        let failure_label = self.failure_label();
        let view = screen(self.model.view(), self.model.surfaced_failure());
        let no_matches = view.is_empty();
        match view {
            Screen::Loading => {
                egui::CentralPanel::default().show(ctx, widgets::loading);
            }
            Screen::Failed { message } => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    widgets::failed(ui, failure_label, message);
                });
            }
            Screen::Directory {
                sort, cards, pager, ..
            } => {
                egui::TopBottomPanel::top("directory_header").show(ctx, |ui| {
                    widgets::header(ui);
                    widgets::controls(ui, &mut self.search_text, sort, &mut intents);
                    ui.add_space(4.0);
                });
                egui::TopBottomPanel::bottom("directory_pager").show(ctx, |ui| {
                    ui.add_space(4.0);
                    widgets::pager(ui, &pager, &mut intents);
                    ui.add_space(4.0);
                });
                egui::CentralPanel::default().show(ctx, |ui| {
                    if no_matches {
                        widgets::no_matches(ui);
                    }
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            for card in &cards {
                                widgets::person_card(ui, card);
                                ui.add_space(6.0);
                            }
                        });
                });
            }
        }

        self.apply_intents(intents);
        ctx.request_repaint_after(EVENT_POLL_INTERVAL);
    }
}
