//! One editor pane: action buttons, the text editor, and the settings toolbar.

use super::super::editing::{indent_lines, replace_char_range};
use super::super::*;
use eframe::egui::{
    self,
    text::{CCursor, CCursorRange},
    text_edit::TextEditState,
};
use egui_extras::syntax_highlighting::{highlight, CodeTheme};
use textconvert_core::{EditorSurface, SelectionRange, SyncStatus};

const TOOLBAR_HEIGHT: f32 = 40.0;
const MIN_EDITOR_HEIGHT: f32 = 80.0;

fn editor_id(side: Side) -> egui::Id {
    egui::Id::new(("pane_editor", side.label()))
}

impl TextConvertApp {
    /// Renders both panes side by side.
    ///
    /// # Returns
    /// Commands the user raised this frame, in click order.
    pub(crate) fn render_panes(&mut self, ctx: &egui::Context) -> Vec<(Side, PaneCommand)> {
        let mut commands = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                for (side, ui) in Side::BOTH.into_iter().zip(columns.iter_mut()) {
                    self.render_pane(ui, side, &mut commands);
                }
            });
        });
        commands
    }

    fn render_pane(&mut self, ui: &mut egui::Ui, side: Side, commands: &mut Vec<(Side, PaneCommand)>) {
        self.render_pane_actions(ui, side, commands);
        ui.separator();

        let editor_height = (ui.available_height() - TOOLBAR_HEIGHT).max(MIN_EDITOR_HEIGHT);
        self.render_editor(ui, side, editor_height);

        ui.separator();
        self.render_pane_toolbar(ui, side, commands);
    }

    fn render_pane_actions(
        &self,
        ui: &mut egui::Ui,
        side: Side,
        commands: &mut Vec<(Side, PaneCommand)>,
    ) {
        let pane = self.engine.pane(side);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(pane.title()).strong());
            match pane.status() {
                SyncStatus::Pending => {
                    ui.spinner();
                }
                SyncStatus::Failed => {
                    if let Some(label) = super::status_label(SyncStatus::Failed) {
                        ui.label(egui::RichText::new(label).small().color(COLOR_ERROR));
                    }
                }
                SyncStatus::Idle => {}
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let buttons = [
                    ("Clear", PaneCommand::Clear),
                    ("Download", PaneCommand::Download),
                    ("Upload", PaneCommand::Upload),
                    ("Paste", PaneCommand::Paste),
                    ("Copy", PaneCommand::Copy),
                ];
                for (label, command) in buttons {
                    if ui.small_button(label).clicked() {
                        commands.push((side, command));
                    }
                }
            });
        });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui, side: Side, height: f32) {
        let id = editor_id(side);
        let settings = self.engine.pane(side).settings();
        let language = self.engine.pane(side).language().unwrap_or("txt").to_string();
        self.sync_cursor_state(ui.ctx(), side, id);
        self.handle_tab_key(ui.ctx(), side, id);

        let wrap = settings.line_wrapping;
        let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
        let mut layouter = |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut job = highlight(ui.ctx(), ui.style(), &theme, text.as_str(), &language);
            job.wrap.max_width = if wrap { wrap_width } else { f32::INFINITY };
            ui.fonts_mut(|fonts| fonts.layout_job(job))
        };
        let scroll = if wrap {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };
        let engine = &mut self.engine;
        let output = scroll
            .id_salt(("pane_scroll", side.label()))
            .max_height(height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::TextEdit::multiline(engine.surface_mut(side).text_mut())
                    .id(id)
                    .code_editor()
                    .desired_width(if wrap { ui.available_width() } else { f32::INFINITY })
                    .min_size(egui::vec2(ui.available_width(), height))
                    .layouter(&mut layouter)
                    .show(ui)
            })
            .inner;

        if let Some(range) = output.cursor_range {
            engine
                .surface_mut(side)
                .set_selection(SelectionRange::new(range.secondary.index, range.primary.index));
        }
        if output.response.changed() {
            let text = engine.surface(side).text().to_string();
            engine.defer_edit(side, text);
        }
    }

    /// Pushes the surface selection into egui after a programmatic replacement.
    fn sync_cursor_state(&mut self, ctx: &egui::Context, side: Side, id: egui::Id) {
        let surface = self.engine.surface(side);
        let revision = surface.revision();
        if self.synced_revisions[side] == Some(revision) {
            return;
        }
        self.synced_revisions[side] = Some(revision);
        let selection = surface.selection();
        let mut state = TextEditState::load(ctx, id).unwrap_or_default();
        state.cursor.set_char_range(Some(CCursorRange::two(
            CCursor::new(selection.anchor),
            CCursor::new(selection.head),
        )));
        state.store(ctx, id);
    }

    /// Tab indents every selected line by the pane's indent unit. With no
    /// selection it inserts the unit at the cursor; a literal tab is left to
    /// egui.
    fn handle_tab_key(&mut self, ctx: &egui::Context, side: Side, id: egui::Id) {
        if !ctx.memory(|memory| memory.has_focus(id)) {
            return;
        }
        let Some(mut state) = TextEditState::load(ctx, id) else {
            return;
        };
        let Some(range) = state.cursor.char_range() else {
            return;
        };
        let indent = self.engine.pane(side).settings().indent_width;
        let selecting = range.primary.index != range.secondary.index;
        if !selecting && indent.is_tab() {
            return;
        }
        if !ctx.input_mut(|input| input.consume_key(egui::Modifiers::NONE, egui::Key::Tab)) {
            return;
        }

        let unit = indent.unit();
        let surface = self.engine.surface_mut(side);
        let (anchor, head) = if selecting {
            indent_lines(
                surface.text_mut(),
                range.secondary.index,
                range.primary.index,
                &unit,
            )
        } else {
            let cursor = replace_char_range(
                surface.text_mut(),
                range.secondary.index,
                range.primary.index,
                &unit,
            );
            (cursor, cursor)
        };
        surface.set_selection(SelectionRange::new(anchor, head));
        state.cursor.set_char_range(Some(CCursorRange::two(
            CCursor::new(anchor),
            CCursor::new(head),
        )));
        state.store(ctx, id);
        let text = surface.text().to_string();
        self.engine.defer_edit(side, text);
    }

    fn render_pane_toolbar(
        &self,
        ui: &mut egui::Ui,
        side: Side,
        commands: &mut Vec<(Side, PaneCommand)>,
    ) {
        let settings = self.engine.pane(side).settings();
        let has_formatter = self.engine.converter().formatter(side).is_some();
        ui.horizontal(|ui| {
            let mut wrap = settings.line_wrapping;
            if ui.checkbox(&mut wrap, "Wrap").changed() {
                commands.push((side, PaneCommand::SetLineWrapping(wrap)));
            }

            let mut beautify = settings.beautify;
            let response = ui
                .add_enabled(has_formatter, egui::Checkbox::new(&mut beautify, "Beautify"))
                .on_disabled_hover_text("This pane has no formatter.");
            if response.changed() {
                commands.push((side, PaneCommand::SetBeautify(beautify)));
            }

            let mut indent = settings.indent_width;
            egui::ComboBox::from_id_salt(("indent", side.label()))
                .selected_text(format!("Indent: {}", indent))
                .show_ui(ui, |ui| {
                    for width in IndentWidth::all() {
                        ui.selectable_value(&mut indent, width, width.to_string());
                    }
                });
            if indent != settings.indent_width {
                commands.push((side, PaneCommand::SetIndent(indent)));
            }
        });
    }
}
