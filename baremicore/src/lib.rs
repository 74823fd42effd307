//! baremicore — engine, formatting and presentation helpers for Baremi

pub mod animation;
pub mod engine;
pub mod format;
pub mod locale;
pub mod logging;
pub mod palette;
pub mod presets;
pub mod storage;
pub mod theme;
pub mod view_model;

pub use engine::{AccumulatorState, EngineError, OperatorMode};
pub use format::{format, format_label, LocaleProfile};
pub use locale::Language;
pub use palette::ThemeMode;
pub use theme::BaremiTheme;
pub use view_model::ViewModel;
