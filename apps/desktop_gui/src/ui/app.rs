use std::{fs, path::Path};

use anyhow::Context;
use arboard::Clipboard;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use s3_blocks::{list_blocks, BlockDefinition};

use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_ui_event;
use crate::controller::reducer::{reduce, EditorModel, Effect};
use crate::ui::theme::{self, block_visual};

pub const APP_TITLE: &str = "AWS Visual Programming";

const SUGGESTED_SCRIPT_NAME: &str = "s3_blocks.py";

pub struct BlockEditorApp {
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    model: EditorModel,
}

impl BlockEditorApp {
    pub fn new(ui_tx: Sender<UiEvent>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            ui_tx,
            ui_rx,
            model: EditorModel::new(),
        }
    }

    fn queue(&mut self, event: UiEvent) {
        dispatch_ui_event(&self.ui_tx, event, &mut self.model.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(effect) = reduce(&mut self.model, event) {
                self.run_effect(effect);
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        let outcome = match effect {
            Effect::CopyToClipboard(text) => copy_to_clipboard(&text)
                .map(|()| Some("Copied generated code to clipboard".to_string()))
                .map_err(|err| UiError::from_message(UiErrorContext::CopyCode, format!("{err:#}"))),
            Effect::SaveToFile(text) => self
                .save_code_as(&text)
                .map_err(|err| UiError::from_message(UiErrorContext::SaveCode, format!("{err:#}"))),
        };

        match outcome {
            Ok(Some(message)) => self.queue(UiEvent::Info(message)),
            Ok(None) => {}
            Err(err) => self.queue(UiEvent::Error(err)),
        }
    }

    fn save_code_as(&self, text: &str) -> anyhow::Result<Option<String>> {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save generated code")
            .set_file_name(SUGGESTED_SCRIPT_NAME)
            .add_filter("Python", &["py"])
            .save_file()
        else {
            return Ok(None);
        };

        write_script(&path, text)?;
        tracing::info!(path = %path.display(), bytes = text.len(), "saved generated code");
        Ok(Some(format!("Saved generated code to {}", path.display())))
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.model.banner.clone() else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} error: {}",
                            err_label(banner.category()),
                            banner.message()
                        ))
                        .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.queue(UiEvent::DismissBanner);
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn render_block_card(&mut self, ui: &mut egui::Ui, block: &BlockDefinition) {
        let connected = self.model.editor.is_connected(block.kind);
        let selected = self.model.editor.selected() == Some(block.kind);
        let visual = block_visual(block, connected);

        let stroke = if selected {
            egui::Stroke::new(2.0, theme::SELECTED_STROKE)
        } else {
            egui::Stroke::NONE
        };

        let response = egui::Frame::NONE
            .fill(visual.fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(16, 14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(visual.glyph)
                            .size(20.0)
                            .color(egui::Color32::WHITE),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(block.label)
                            .size(16.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    if let Some(dot) = visual.indicator {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                            ui.painter().circle_filled(rect.center(), 6.0, dot);
                        });
                    }
                });
            })
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            self.queue(UiEvent::BlockClicked(block.kind));
        }
    }

    fn show_code_panel(&mut self, ui: &mut egui::Ui) {
        if self.model.editor.generated_text().is_empty() {
            return;
        }

        let mut requested = None;
        egui::Frame::NONE
            .fill(theme::CODE_PANEL_FILL)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Generated code")
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Clear").clicked() {
                            requested = Some(UiEvent::ClearEditor);
                        }
                        if ui.button("Save as…").clicked() {
                            requested = Some(UiEvent::SaveCode);
                        }
                        if ui.button("Copy").clicked() {
                            requested = Some(UiEvent::CopyCode);
                        }
                    });
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.model.editor.generated_text())
                                    .monospace()
                                    .color(egui::Color32::WHITE),
                            )
                            .wrap()
                            .selectable(true),
                        );
                    });
            });

        if let Some(event) = requested {
            self.queue(event);
        }
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.model.status).weak());
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .fill(theme::PAGE_FILL)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new(APP_TITLE).strong().size(24.0));
                ui.add_space(16.0);

                self.show_status_banner(ui);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for block in list_blocks() {
                        self.render_block_card(ui, block);
                        ui.add_space(12.0);
                    }
                    ui.add_space(20.0);
                    self.show_code_panel(ui);
                });
            });
    }
}

impl eframe::App for BlockEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_editor(ctx);

        // Events queued during this frame are applied at the start of the next.
        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("clipboard rejected generated code")?;
    Ok(())
}

fn write_script(path: &Path, text: &str) -> anyhow::Result<()> {
    fs::write(path, text)
        .with_context(|| format!("failed to write generated code to '{}'", path.display()))
}
