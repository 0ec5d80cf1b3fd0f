//! Stylesheet templating.
//!
//! # How a theme becomes a stylesheet (for beginners)
//!
//! Three kinds of text file take part:
//!
//! ```text
//! style_template.qss        colors_dark.qss             plus-symbol-template.svg
//! ───────────────────       ──────────────────────      ────────────────────────
//! QWidget {                 @theme-name = Dark          <path fill="@button-plus-icon"
//!   background: @bg;        @bg = #1e1e1e                     d="..."/>
//!   color: @fg;             @fg = #f0f0f0
//! }                         @button-plus-icon = #4caf50
//! QPushButton#add {
//!   image: @button-plus-icon;
//! }
//! ```
//!
//! - **`palette`** parses the palette file into ordered `(keyword, value)` pairs.
//! - **`icons`** knows which keywords are backed by an SVG icon template.
//!   Those keywords are bound to a `url(...)` of a recoloured copy of the SVG
//!   instead of the raw colour.
//! - **`template`** replaces every `@keyword` token in the style template with
//!   its binding and reports tokens that had no binding.
//!
//! Reading the files and writing the recoloured SVGs is the job of the
//! theming infrastructure in the `appshell` crate.

pub mod icons;
pub mod palette;
pub mod template;
