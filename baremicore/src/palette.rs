//! Light and dark colour sets
//!
//! Slate/blue scheme with a three-stop diagonal background gradient.

use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Label of the theme switch: the mode you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::light(),
            Self::Dark => Palette::dark(),
        }
    }

    pub fn gradient(self) -> Gradient {
        match self {
            Self::Light => Gradient {
                stops: [
                    (0.0, rgb(0xf8, 0xfa, 0xfc)),
                    (0.6, rgb(0xe2, 0xe8, 0xf0)),
                    (1.0, rgb(0xb6, 0xee, 0xc5)),
                ],
            },
            Self::Dark => Gradient {
                stops: [
                    (0.0, rgb(0x02, 0x12, 0x37)),
                    (0.6, rgb(0x01, 0x26, 0x60)),
                    (1.0, rgb(0x0f, 0x17, 0x2a)),
                ],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub text: Color32,
    pub button_bg: Color32,
    pub button_text: Color32,
    pub operator_bg: Color32,
    pub operator_text: Color32,
    pub display_bg: Color32,
    pub clear_bg: Color32,
    pub clear_text: Color32,
    pub border: Color32,
    pub shadow: Color32,
    pub active_button: Color32,
    pub lang_toggle_bg: Color32,
    pub op_icon: Color32,
    pub toggle_track: Color32,
    pub toggle_track_active: Color32,
    pub toggle_knob: Color32,
    pub end_icon: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: rgb(0xf8, 0xfa, 0xfc),
            text: rgb(0x1e, 0x29, 0x3b),
            button_bg: Color32::WHITE,
            button_text: rgb(0x47, 0x55, 0x69),
            operator_bg: rgb(0x01, 0x15, 0x36),
            operator_text: Color32::WHITE,
            display_bg: rgb(0xf1, 0xf5, 0xf9),
            clear_bg: rgb(0xef, 0x44, 0x44),
            clear_text: Color32::WHITE,
            border: rgb(0xe2, 0xe8, 0xf0),
            shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 0x20),
            active_button: Color32::from_rgba_unmultiplied(0x3b, 0x82, 0xf6, 0x20),
            lang_toggle_bg: rgb(0xe2, 0xe8, 0xf0),
            op_icon: Color32::WHITE,
            toggle_track: rgb(0xe2, 0xe8, 0xf0),
            toggle_track_active: rgb(0x00, 0x16, 0x38),
            toggle_knob: Color32::WHITE,
            end_icon: rgb(0xf3, 0xee, 0x99),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: rgb(0x0f, 0x17, 0x2a),
            text: rgb(0xf1, 0xf5, 0xf9),
            button_bg: rgb(0x1e, 0x29, 0x3b),
            button_text: rgb(0xcb, 0xd5, 0xe1),
            operator_bg: rgb(0xe4, 0xf4, 0x04),
            operator_text: rgb(0x0f, 0x17, 0x2a),
            display_bg: rgb(0x1e, 0x29, 0x3b),
            clear_bg: rgb(0xf8, 0x71, 0x71),
            clear_text: rgb(0x0f, 0x17, 0x2a),
            border: rgb(0x33, 0x41, 0x55),
            shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 0x60),
            active_button: Color32::from_rgba_unmultiplied(0x60, 0xa5, 0xfa, 0x30),
            lang_toggle_bg: rgb(0x33, 0x41, 0x55),
            op_icon: rgb(0x0f, 0x17, 0x2a),
            toggle_track: rgb(0x33, 0x41, 0x55),
            toggle_track_active: rgb(0x00, 0x17, 0x32),
            toggle_knob: rgb(0x7c, 0xd4, 0xe2),
            end_icon: rgb(0xb2, 0xec, 0xee),
        }
    }
}

/// Background gradient: `(position, colour)` stops along the diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub stops: [(f32, Color32); 3],
}

impl Gradient {
    /// Colour at `t` in `0.0..=1.0`, linearly blended between stops.
    pub fn sample(&self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let local = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
                return lerp_color(c0, c1, local);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let g = ThemeMode::Light.gradient();
        assert_eq!(g.sample(0.0), rgb(0xf8, 0xfa, 0xfc));
        assert_eq!(g.sample(0.6), rgb(0xe2, 0xe8, 0xf0));
        assert_eq!(g.sample(1.0), rgb(0xb6, 0xee, 0xc5));
        // out of range clamps
        assert_eq!(g.sample(2.0), g.sample(1.0));
    }

    #[test]
    fn test_gradient_midpoint_blends() {
        let g = ThemeMode::Dark.gradient();
        let mid = g.sample(0.3);
        assert_eq!(mid.r(), 2);
        assert!(mid.b() > 0x37 && mid.b() < 0x60);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle_label(), "🌙");
        assert_eq!(ThemeMode::Dark.palette(), Palette::dark());
        assert_ne!(Palette::light(), Palette::dark());
    }
}
