//! Stateless widgets for the directory screens.

use client_core::presentation::{
    Pager, PersonCard, FAILED_TITLE, HEADING, NEXT_LABEL, NO_MATCHES_HINT, NO_MATCHES_TITLE,
    PREVIOUS_LABEL, SEARCH_PLACEHOLDER,
};
use eframe::egui;
use egui::{Color32, RichText};
use shared::domain::{Icon, SortMode};

use crate::controller::reducer::UserIntent;

const CARD_ICON_SIZE: f32 = 30.0;
const PLACEHOLDER_ICON_SIZE: f32 = 64.0;
const SEARCH_FIELD_WIDTH: f32 = 280.0;

pub fn icon_glyph(icon: Icon) -> (&'static str, Color32) {
    match icon {
        Icon::Human => ("👤", Color32::from_rgb(88, 166, 255)),
        Icon::Droid => ("🤖", Color32::from_rgb(122, 201, 122)),
        Icon::Unknown => ("❓", Color32::from_rgb(190, 190, 190)),
    }
}

pub fn loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.add(egui::Spinner::new().size(PLACEHOLDER_ICON_SIZE));
    });
}

pub fn failed(ui: &mut egui::Ui, label: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(
            RichText::new("⚠")
                .size(PLACEHOLDER_ICON_SIZE)
                .color(Color32::from_rgb(230, 90, 90)),
        );
        ui.heading(FAILED_TITLE);
        ui.label(RichText::new(format!("{label}: {message}")).weak());
    });
}

pub fn header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.label(RichText::new(HEADING).heading().strong().size(28.0));
        ui.add_space(6.0);
    });
}

/// Search box and sort selector. Edits are reported as intents instead of
/// being applied in place.
pub fn controls(
    ui: &mut egui::Ui,
    search_text: &mut String,
    sort: SortMode,
    intents: &mut Vec<UserIntent>,
) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(search_text)
                .hint_text(SEARCH_PLACEHOLDER)
                .desired_width(SEARCH_FIELD_WIDTH),
        );
        if response.changed() {
            intents.push(UserIntent::Search(search_text.clone()));
        }
        ui.label("🔍");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut selected = sort;
            egui::ComboBox::from_id_salt("sort_mode")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for mode in SortMode::ALL {
                        ui.selectable_value(&mut selected, mode, mode.label());
                    }
                });
            if selected != sort {
                intents.push(UserIntent::Sort(selected));
            }
        });
    });
}

pub fn no_matches(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(
            RichText::new("⚠")
                .size(PLACEHOLDER_ICON_SIZE)
                .color(Color32::from_rgb(240, 200, 80)),
        );
        ui.heading(NO_MATCHES_TITLE);
        ui.label(RichText::new(NO_MATCHES_HINT).strong());
    });
}

pub fn person_card(ui: &mut egui::Ui, card: &PersonCard<'_>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                for icon in &card.icons {
                    let (glyph, color) = icon_glyph(*icon);
                    ui.label(RichText::new(glyph).size(CARD_ICON_SIZE).color(color));
                }
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(card.name).size(20.0).strong());
                    ui.horizontal(|ui| {
                        stat(ui, "Height:", card.height);
                        stat(ui, "Mass:", card.mass);
                        stat(ui, "Gender:", card.gender);
                    });
                });
            });
        });
}

fn stat(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).strong());
    ui.label(value);
    ui.add_space(12.0);
}

pub fn pager(ui: &mut egui::Ui, pager: &Pager, intents: &mut Vec<UserIntent>) {
    ui.columns(3, |columns| {
        if pager.show_previous && columns[0].button(PREVIOUS_LABEL).clicked() {
            intents.push(UserIntent::PreviousPage);
        }
        columns[1].vertical_centered(|ui| {
            ui.label(pager.position_label());
        });
        columns[2].with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if pager.show_next && ui.button(NEXT_LABEL).clicked() {
                intents.push(UserIntent::NextPage);
            }
        });
    });
}
