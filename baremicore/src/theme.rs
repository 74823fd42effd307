//! Baremi theme — slate/blue palettes, rounded controls
//!
//! Shabnam for Persian text and digits, Inter for English. Fonts are read
//! from disk at start-up; when they are missing egui's built-in fonts are
//! used instead.

use std::path::PathBuf;

use egui::{FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use tracing::{debug, warn};

use crate::locale::Language;
use crate::palette::{Palette, ThemeMode};

/// Font family name and the file it is loaded from.
const FONT_FILES: [(&str, &str); 4] = [
    ("Shabnam", "Shabnam-Medium.ttf"),
    ("ShabnamBold", "Shabnam-Bold.ttf"),
    ("ShabnamDigit", "Shabnam-Bold-FD.ttf"),
    ("Inter", "Inter-Bold.ttf"),
];

pub struct BaremiTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub font_size_button: f32,
    pub font_size_display: f32,
    pub rounding: f32,
    pub item_spacing: f32,
}

impl Default for BaremiTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_heading: 24.0,
            font_size_small: 14.0,
            font_size_button: 20.0,
            font_size_display: 52.0,
            rounding: 20.0,
            item_spacing: 12.0,
        }
    }
}

impl BaremiTheme {
    fn font_search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                dirs.push(dir.join("fonts"));
                dirs.push(dir.to_path_buf());
                // target/{debug,release} -> workspace root
                if let Some(root) = dir.parent().and_then(|p| p.parent()) {
                    dirs.push(root.join("fonts"));
                }
            }
        }
        dirs.push(PathBuf::from("/usr/share/baremi/fonts"));
        dirs.push(PathBuf::from("/usr/share/fonts/truetype/shabnam"));
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs
    }

    fn load_font(file_name: &str) -> Option<Vec<u8>> {
        Self::font_search_dirs()
            .into_iter()
            .map(|dir| dir.join(file_name))
            .find_map(|path| std::fs::read(&path).ok())
    }

    /// Register every font found on disk as its own named family, and put
    /// the text font of `language` first in the proportional family.
    pub fn install_fonts(&self, ctx: &egui::Context, language: Language) {
        let mut fonts = FontDefinitions::default();
        let mut loaded = Vec::new();

        for (family, file) in FONT_FILES {
            match Self::load_font(file) {
                Some(data) => {
                    fonts.font_data.insert(family.to_owned(), FontData::from_owned(data));
                    // fall back to egui's fonts for glyphs the family lacks
                    let mut chain = vec![family.to_owned()];
                    chain.extend(fonts.families.get(&FontFamily::Proportional).cloned().unwrap_or_default());
                    fonts.families.insert(FontFamily::Name(family.into()), chain);
                    loaded.push(family);
                }
                None => {
                    warn!(font = family, file, "font not found, using built-in fallback");
                    let fallback = fonts.families.get(&FontFamily::Proportional).cloned().unwrap_or_default();
                    fonts.families.insert(FontFamily::Name(family.into()), fallback);
                }
            }
        }

        let text_font = language.fonts().text;
        if loaded.contains(&text_font) {
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, text_font.to_owned());
        }
        debug!(?loaded, language = language.code(), "fonts installed");
        ctx.set_fonts(fonts);
    }

    /// Apply palette colours and text sizes to an egui context.
    pub fn apply(&self, ctx: &egui::Context, palette: &Palette, mode: ThemeMode) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if mode.is_dark() { Visuals::dark() } else { Visuals::light() };

        visuals.override_text_color = Some(palette.text);
        visuals.window_fill = palette.background;
        // panels are transparent so the gradient shows through
        visuals.panel_fill = egui::Color32::TRANSPARENT;
        visuals.extreme_bg_color = palette.display_bg;
        visuals.window_rounding = Rounding::same(16.0);
        visuals.menu_rounding = Rounding::same(8.0);

        let rounding = Rounding::same(self.rounding);
        let paint = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = palette.button_bg;
            ws.weak_bg_fill = palette.button_bg;
            ws.bg_stroke = Stroke::new(1.0, palette.border);
            ws.fg_stroke = Stroke::new(1.0, palette.button_text);
            ws.rounding = rounding;
        };
        paint(&mut visuals.widgets.noninteractive);
        paint(&mut visuals.widgets.inactive);
        paint(&mut visuals.widgets.hovered);
        paint(&mut visuals.widgets.active);
        paint(&mut visuals.widgets.open);
        visuals.widgets.hovered.weak_bg_fill = palette.active_button;
        visuals.widgets.active.weak_bg_fill = palette.active_button;

        visuals.selection.bg_fill = palette.active_button;
        visuals.selection.stroke = Stroke::new(1.0, palette.text);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);

        ctx.set_style(style);
    }

    pub fn number_font(&self, size: f32, language: Language) -> FontId {
        FontId::new(size, FontFamily::Name(language.fonts().number.into()))
    }

    pub fn text_font(&self, size: f32, language: Language) -> FontId {
        FontId::new(size, FontFamily::Name(language.fonts().text.into()))
    }

    pub fn operator_font(&self, size: f32, language: Language) -> FontId {
        FontId::new(size, FontFamily::Name(language.fonts().operator.into()))
    }
}
