// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop front-end with the snowfall background.

use crate::browser::{Browser, BrowserEvent, BrowserView};
use crate::snow::SnowField;
use crate::types::Target;
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(14, 18, 30);
const SNOW: egui::Color32 = egui::Color32::from_rgba_premultiplied(178, 178, 178, 178);

pub struct BrowserGui {
    browser: Browser,
    snow: SnowField,
}

impl BrowserGui {
    pub fn run(browser: Browser) -> Result<()> {
        let options = NativeOptions::default();
        let app = Self {
            browser,
            snow: SnowField::new(1024.0, 768.0)?,
        };
        eframe::run_native(
            "cheat-sheet",
            options,
            Box::new(|_cc| Box::new(app)),
        )
        .map_err(|err| anyhow!("failed to launch cheat sheet GUI: {err}"))?;
        Ok(())
    }

    fn paint_snow(&mut self, ctx: &egui::Context) {
        let screen = ctx.screen_rect();
        if let Err(err) = self.snow.resize(screen.width(), screen.height()) {
            log::warn!("keeping previous snow field: {err:#}");
        }
        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(screen, 0.0, BACKGROUND);
        for flake in self.snow.flakes() {
            painter.circle_filled(
                screen.min + egui::vec2(flake.x, flake.y),
                flake.radius,
                SNOW,
            );
        }
        self.snow.step();
        ctx.request_repaint();
    }
}

impl App for BrowserGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.paint_snow(ctx);

        let view = self.browser.view();
        let mut events = Vec::new();
        let mut hovered = None;

        egui::TopBottomPanel::top("header")
            .frame(transparent_frame(ctx))
            .show(ctx, |ui| {
                ui.heading("Cheat Sheet");
                ui.horizontal(|ui| {
                    for language in &view.languages {
                        let selected = *language == view.selected_language;
                        if ui.selectable_label(selected, language.as_str()).clicked() && !selected {
                            events.push(BrowserEvent::SelectLanguage(language.clone()));
                        }
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    let mut query = view.query.clone();
                    if ui.text_edit_singleline(&mut query).changed() {
                        events.push(BrowserEvent::SetQuery(query));
                    }
                });
            });

        egui::SidePanel::left("categories")
            .frame(transparent_frame(ctx))
            .min_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    render_categories(ui, &view, &mut events, &mut hovered);
                });
            });

        egui::CentralPanel::default()
            .frame(transparent_frame(ctx))
            .show(ctx, |ui| {
                let detail = &view.detail;
                ui.heading(detail.title.as_str());
                if !detail.description.is_empty() {
                    ui.label(detail.description.as_str());
                }
                if !detail.code.is_empty() {
                    ui.separator();
                    ui.label(egui::RichText::new(detail.code.as_str()).monospace());
                }
            });

        let pointer = ctx
            .pointer_hover_pos()
            .map(|pos| (pos.x, pos.y))
            .unwrap_or_default();
        events.push(match hovered {
            Some(target) if view.tooltip.hovered() == Some(&target) => {
                BrowserEvent::HoverMove { pointer }
            }
            Some(target) => BrowserEvent::HoverEnter { target, pointer },
            None => BrowserEvent::HoverLeave,
        });

        for event in events {
            self.browser.apply(event);
        }
        show_tooltip(ctx, &self.browser.view());
    }
}

/// Panels stay see-through so the snow shows behind the widgets.
fn transparent_frame(ctx: &egui::Context) -> egui::Frame {
    egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::TRANSPARENT)
}

fn render_categories(
    ui: &mut egui::Ui,
    view: &BrowserView,
    events: &mut Vec<BrowserEvent>,
    hovered: &mut Option<Target>,
) {
    if view.categories.is_empty() {
        ui.weak("No matches");
        return;
    }
    for category in &view.categories {
        let response = egui::CollapsingHeader::new(category.name.as_str())
            .id_source(("category", &view.selected_language, &category.name))
            .open(Some(category.is_expanded))
            .show(ui, |ui| {
                for entry in &category.entries {
                    let target = Target::entry(&category.name, &entry.name);
                    let selected = view.selection.as_ref() == Some(&target);
                    let button = ui.selectable_label(selected, entry.name.as_str());
                    if button.hovered() {
                        *hovered = Some(target.clone());
                    }
                    if button.clicked() {
                        events.push(BrowserEvent::Activate(target));
                    }
                }
            });
        if response.header_response.clicked() {
            events.push(BrowserEvent::Activate(Target::category(&category.name)));
        }
    }
}

fn show_tooltip(ctx: &egui::Context, view: &BrowserView) {
    let (Some(text), Some((x, y))) = (view.tooltip.text(), view.tooltip.position()) else {
        return;
    };
    egui::Area::new(egui::Id::new("entry-tip"))
        .order(egui::Order::Tooltip)
        .fixed_pos(egui::pos2(x, y))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(text);
            });
        });
}
