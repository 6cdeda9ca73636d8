//! Widget catalog.
//!
//! Every widget is a method on [`crate::Ui`]. A call allocates its rect,
//! derives its id from the label, updates `hot`/`active`, reads any tween it
//! owns and draws. Nothing survives the call except tween and scroll state.
//!
//! | group    | widgets                                                    |
//! |----------|------------------------------------------------------------|
//! | button   | button, button_colored, button_fill(_colored), tile, list_item |
//! | toggle   | toggle, checkbox, radio                                    |
//! | value    | slider, spinner, progress, gauge                           |
//! | display  | label(_colored, _fmt), badge, header, stat_card, separator, icon |
//! | panel    | panel_begin, panel_end                                     |

mod button;
mod display;
mod panel;
mod toggle;
mod value;

pub use panel::ScrollEntry;
pub(crate) use panel::{PanelFrame, PANEL_DEPTH, SCROLL_PANELS};

/// Tween salts, mixed into a widget's id to key its animations.
pub(crate) mod salt {
    /// Toggle knob position.
    pub const TOGGLE_KNOB: u32 = 0xA1;
    /// Checkbox fill.
    pub const CHECK_FILL: u32 = 0xCB;
    /// Radio inner dot.
    pub const RADIO_DOT: u32 = 0xD1;
    /// Slider fill width.
    pub const SLIDER_FILL: u32 = 0xF1;
    /// Slider press halo.
    pub const SLIDER_HALO: u32 = 0xF2;
    /// Spinner minus button.
    pub const SPIN_MINUS: u32 = 0xE0;
    /// Spinner plus button.
    pub const SPIN_PLUS: u32 = 0xE1;
}
