//! padcore — shared library for the padcalc calculator

pub mod logging;
pub mod safety;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use theme::CalcTheme;
pub use widgets::KeypadButton;
