//! # GLINT UI
//!
//! Immediate-mode widgets for small RGB565 panels:
//! - No heap on the frame path
//! - One fixed-point scale for every metric
//! - Only the touched rows go to the panel
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     FRAME PIPELINE                     │
//! ├────────────────────────────────────────────────────────┤
//! │  PointerSample → Ui::begin_frame → widgets → flush     │
//! │       ↓               ↓               ↓          ↓     │
//! │  InputCache    Layout + Ids     draw::* on    dirty    │
//! │                 + AnimPool       Painter      band     │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut fb = [0u16; 320 * 240];
//! let mut ui = Ui::new(Canvas::new(panel, &mut fb), Theme::DARK);
//! loop {
//!     ui.begin_frame(touch.sample(), 16);
//!     if ui.button("Start") { start(); }
//!     ui.slider("Level", &mut level, 0, 100);
//!     ui.end_frame();
//!     ui.painter_mut().flush();
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod canvas;
pub mod context;
pub mod draw;
pub mod error;
pub mod font;
pub mod input;
pub mod layout;
pub mod painter;
pub mod record;
pub mod style;
pub mod text;
pub mod widget;

pub use animation::{AnimPool, AnimSlot, Easing, ANIM_SLOTS};
pub use canvas::Canvas;
pub use context::Ui;
pub use error::{ConfigError, ConfigResult};
pub use input::{InputCache, PointerSample};
pub use layout::{Container, Direction, LayoutStack, LAYOUT_STACK_DEPTH};
pub use painter::{Display, Painter};
pub use record::{MemoryDisplay, PaintOp, PaintRecorder};
pub use style::{Theme, ThemePreset};
pub use text::{FmtBuf, LABEL_CAPACITY};
pub use widget::ScrollEntry;

pub use glint_core::{rgb565, Extent, Point, Rect, Rgb565, Scale, WidgetId};
