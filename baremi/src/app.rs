//! Baremi application

use std::time::Instant;

use baremicore::animation::{lerp, Animator};
use baremicore::locale::TextDirection;
use baremicore::palette::{Gradient, Palette};
use baremicore::presets::Preset;
use baremicore::storage::Settings;
use baremicore::view_model::ViewModel;
use baremicore::{AccumulatorState, BaremiTheme, Language, OperatorMode, ThemeMode};
use egui::emath::Rot2;
use egui::{Align, Color32, Context, Layout, Pos2, Rect, RichText, Rounding, Sense, Stroke, Vec2};
use tracing::{debug, info, warn};

const BUTTON_SIZE: f32 = 72.0;
/// Operator switch track size
const SWITCH_SIZE: Vec2 = Vec2::new(102.0, 60.0);
const KNOB_WIDTH: f32 = 48.0;
/// Subdivisions of the background gradient mesh per side
const GRADIENT_CELLS: u32 = 12;

pub struct BaremiApp {
    state: AccumulatorState,
    language: Language,
    theme_mode: ThemeMode,
    presets: Vec<Preset>,
    theme: BaremiTheme,
    animator: Animator,
    last_update: Instant,
}

impl BaremiApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings) -> Self {
        let system_dark = cc.egui_ctx.style().visuals.dark_mode;
        let app = Self {
            state: AccumulatorState::new(),
            language: settings.language,
            theme_mode: settings.initial_theme(system_dark),
            presets: settings.preset_list(),
            theme: BaremiTheme::default(),
            animator: Animator::new(),
            last_update: Instant::now(),
        };
        app.theme.install_fonts(&cc.egui_ctx, app.language);
        app.apply_theme(&cc.egui_ctx);
        info!(
            language = app.language.code(),
            theme = ?app.theme_mode,
            presets = app.presets.len(),
            "calculator ready"
        );
        app
    }

    fn apply_theme(&self, ctx: &Context) {
        self.theme.apply(ctx, &self.theme_mode.palette(), self.theme_mode);
    }

    fn press_preset(&mut self, value: f64) {
        match self.state.apply_operand(value) {
            Ok(next) => {
                self.state = next;
                self.animator.operand_applied();
                debug!(value, total = self.state.total, "operand applied");
            }
            Err(error) => warn!(%error, "tap ignored"),
        }
    }

    fn toggle_operator(&mut self) {
        self.state = self.state.toggle_operator_mode();
        self.animator.operator_toggled(self.state.operator_mode);
        debug!(mode = ?self.state.operator_mode, "operator toggled");
    }

    fn clear(&mut self) {
        self.state = self.state.reset();
        self.animator.cleared();
        debug!("cleared");
    }

    fn toggle_language(&mut self, ctx: &Context) {
        self.language = self.language.toggled();
        self.theme.install_fonts(ctx, self.language);
        info!(language = self.language.code(), "language switched");
    }

    fn toggle_theme(&mut self, ctx: &Context) {
        self.theme_mode = self.theme_mode.toggled();
        self.apply_theme(ctx);
        info!(theme = ?self.theme_mode, "theme switched");
    }

    fn render_header(&mut self, ui: &mut egui::Ui, vm: &ViewModel) {
        let mut toggle_theme = false;
        let mut toggle_language = false;
        let (lead, trail) = layouts(vm.direction);

        ui.with_layout(lead, |ui| {
            ui.label(
                RichText::new(vm.title)
                    .font(self.theme.text_font(self.theme.font_size_heading, self.language))
                    .color(vm.palette.text),
            );
            ui.with_layout(trail, |ui| {
                let pill = |label: &str, font| {
                    egui::Button::new(RichText::new(label).font(font).color(vm.palette.text))
                        .fill(vm.palette.lang_toggle_bg)
                        .stroke(Stroke::NONE)
                        .rounding(Rounding::same(20.0))
                };
                let body = self.theme.font_size_body;
                toggle_theme = ui
                    .add(pill(vm.theme_toggle_label, egui::FontId::proportional(body)))
                    .clicked();
                toggle_language = ui
                    .add(pill(vm.language_toggle_label, self.theme.text_font(body, self.language)))
                    .clicked();
            });
        });

        if toggle_theme {
            self.toggle_theme(ui.ctx());
        }
        if toggle_language {
            self.toggle_language(ui.ctx());
        }
    }

    fn render_display(&mut self, ui: &mut egui::Ui, vm: &ViewModel) {
        let scale = self.animator.display_scale();
        let width = ui.available_width() * scale;
        let height = 120.0 * scale;
        let (outer, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 120.0 * 1.05), Sense::hover());
        let rect = Rect::from_center_size(outer.center(), egui::vec2(width, height));

        let painter = ui.painter_at(outer);
        painter.rect_filled(rect.translate(egui::vec2(0.0, 4.0)), 16.0, vm.palette.shadow);
        painter.rect_filled(rect, 16.0, vm.palette.display_bg);

        let galley = ui.painter().layout_no_wrap(
            vm.total.clone(),
            self.theme.number_font(self.theme.font_size_display * scale, self.language),
            vm.palette.text,
        );
        let text_pos = match vm.direction {
            TextDirection::LeftToRight => Pos2::new(rect.left() + 56.0, rect.center().y - galley.size().y / 2.0),
            TextDirection::RightToLeft => {
                Pos2::new(rect.right() - 24.0 - galley.size().x, rect.center().y - galley.size().y / 2.0)
            }
        };
        painter.galley(text_pos, galley, vm.palette.text);

        // operator badge, top-left corner of the display
        let badge = Rect::from_min_size(rect.left_top() + egui::vec2(12.0, 12.0), egui::vec2(32.0, 32.0));
        let response = ui.interact(badge, ui.id().with("operator_badge"), Sense::click());
        painter.circle_filled(badge.center(), 16.0, vm.palette.operator_bg);
        draw_operator_icon(
            &painter,
            badge.center(),
            9.0 * self.animator.operator_scale(),
            self.animator.operator_rotation_degrees().to_radians(),
            vm.operator_mode,
            vm.palette.op_icon,
        );
        if response.clicked() {
            self.toggle_operator();
        }
    }

    fn render_last_input(&self, ui: &mut egui::Ui, vm: &ViewModel) {
        let Some((prefix, value)) = &vm.last_input else {
            // keep the layout from jumping when the line disappears
            ui.add_space(self.theme.font_size_small + 4.0);
            return;
        };
        let faded = vm.palette.text.gamma_multiply(0.7);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let mut parts = [
                    RichText::new(*prefix).font(self.theme.text_font(self.theme.font_size_small, self.language)),
                    RichText::new(value.as_str())
                        .font(self.theme.number_font(self.theme.font_size_small, self.language)),
                ];
                if vm.direction == TextDirection::RightToLeft {
                    parts.reverse();
                }
                for part in parts {
                    ui.label(part.color(faded));
                }
            });
        });
    }

    fn render_presets(&mut self, ui: &mut egui::Ui, vm: &ViewModel) {
        let spacing = ui.spacing().item_spacing.x;
        let mut pressed = None;
        for row in &vm.rows {
            let row_width = row.len() as f32 * BUTTON_SIZE + (row.len().saturating_sub(1)) as f32 * spacing;
            ui.horizontal(|ui| {
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                for button in row {
                    let text = RichText::new(button.label.as_str())
                        .font(self.theme.number_font(self.theme.font_size_button, self.language))
                        .color(vm.palette.button_text);
                    let clicked = ui
                        .add(
                            egui::Button::new(text)
                                .fill(vm.palette.button_bg)
                                .stroke(Stroke::new(1.0, vm.palette.border))
                                .rounding(Rounding::same(self.theme.rounding))
                                .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE)),
                        )
                        .clicked();
                    if clicked {
                        pressed = Some(button.value);
                    }
                }
            });
        }
        if let Some(value) = pressed {
            self.press_preset(value);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, vm: &ViewModel) {
        let spacing = 20.0;
        let row_width = SWITCH_SIZE.x + spacing + BUTTON_SIZE;
        let mut toggled = false;
        let mut cleared = false;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

            let (rect, response) = ui.allocate_exact_size(SWITCH_SIZE, Sense::click());
            if ui.is_rect_visible(rect) {
                draw_switch(ui.painter(), rect, self.animator.knob_position(), &vm.palette);
            }
            toggled = response.clicked();

            let clear = RichText::new(vm.clear_label)
                .font(self.theme.operator_font(self.theme.font_size_button, self.language))
                .color(vm.palette.clear_text);
            cleared = ui
                .add(
                    egui::Button::new(clear)
                        .fill(vm.palette.clear_bg)
                        .stroke(Stroke::NONE)
                        .rounding(Rounding::same(self.theme.rounding))
                        .min_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE)),
                )
                .clicked();
        });

        if toggled {
            self.toggle_operator();
        }
        if cleared {
            self.clear();
        }
    }
}

impl eframe::App for BaremiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_update).as_secs_f32();
        self.last_update = now;
        self.animator.update(dt);

        let vm = ViewModel::build(&self.state, self.language, self.theme_mode, &self.presets);
        paint_background(ctx, &vm.gradient);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::same(20.0)))
            .show(ctx, |ui| {
                self.render_header(ui, &vm);
                ui.add_space(30.0);
                self.render_display(ui, &vm);
                ui.add_space(8.0);
                self.render_last_input(ui, &vm);
                ui.add_space(20.0);
                self.render_presets(ui, &vm);
                ui.add_space(30.0);
                self.render_controls(ui, &vm);
            });

        if self.animator.is_animating() {
            ctx.request_repaint();
        }
    }
}

/// Leading and trailing layouts for a reading direction.
fn layouts(direction: TextDirection) -> (Layout, Layout) {
    match direction {
        TextDirection::LeftToRight => (Layout::left_to_right(Align::Center), Layout::right_to_left(Align::Center)),
        TextDirection::RightToLeft => (Layout::right_to_left(Align::Center), Layout::left_to_right(Align::Center)),
    }
}

/// Diagonal gradient behind every panel.
fn paint_background(ctx: &Context, gradient: &Gradient) {
    let rect = ctx.screen_rect();
    let n = GRADIENT_CELLS;
    let mut mesh = egui::Mesh::default();
    for j in 0..=n {
        for i in 0..=n {
            let u = i as f32 / n as f32;
            let v = j as f32 / n as f32;
            let pos = Pos2::new(lerp(rect.left(), rect.right(), u), lerp(rect.top(), rect.bottom(), v));
            mesh.colored_vertex(pos, gradient.sample((u + v) / 2.0));
        }
    }
    for j in 0..n {
        for i in 0..n {
            let a = j * (n + 1) + i;
            let c = a + n + 1;
            mesh.add_triangle(a, a + 1, c);
            mesh.add_triangle(a + 1, c + 1, c);
        }
    }
    ctx.layer_painter(egui::LayerId::background()).add(egui::Shape::mesh(mesh));
}

/// Plus or minus drawn as strokes, rotated about `center`.
fn draw_operator_icon(
    painter: &egui::Painter,
    center: Pos2,
    half: f32,
    angle: f32,
    mode: OperatorMode,
    color: Color32,
) {
    let rot = Rot2::from_angle(angle);
    let stroke = Stroke::new(2.5, color);
    let bar = |d: Vec2| [center + rot * -d, center + rot * d];
    painter.line_segment(bar(egui::vec2(half, 0.0)), stroke);
    if mode == OperatorMode::Add {
        painter.line_segment(bar(egui::vec2(0.0, half)), stroke);
    }
}

/// Add/subtract switch. The knob covers the inactive sign: it sits over
/// the minus end while adding and slides over the plus end when
/// subtracting.
fn draw_switch(painter: &egui::Painter, rect: Rect, knob: f32, palette: &Palette) {
    let radius = rect.height() / 2.0;
    painter.rect_filled(rect.translate(egui::vec2(0.0, 4.0)), radius, palette.shadow);
    painter.rect_filled(rect, radius, palette.toggle_track);
    painter.rect_filled(rect.shrink(2.0), radius - 2.0, palette.toggle_track_active);

    let plus_center = Pos2::new(rect.left() + 16.0 + 14.0, rect.center().y);
    let minus_center = Pos2::new(rect.right() - 16.0 - 14.0, rect.center().y);
    draw_operator_icon(painter, plus_center, 10.0, 0.0, OperatorMode::Add, palette.end_icon);
    draw_operator_icon(painter, minus_center, 10.0, 0.0, OperatorMode::Subtract, palette.end_icon);

    let right_x = rect.right() - 2.0 - KNOB_WIDTH;
    let left_x = rect.left() + 2.0;
    let knob_rect = Rect::from_min_size(
        Pos2::new(lerp(right_x, left_x, knob), rect.top() + 1.0),
        egui::vec2(KNOB_WIDTH, rect.height() - 2.0),
    );
    painter.rect_filled(knob_rect.translate(egui::vec2(0.0, 2.0)), 22.0, palette.shadow);
    painter.rect_filled(knob_rect, 22.0, palette.toggle_knob);
}
