//! # TUI Components
//!
//! All UI components for the terminal page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: product name, menu and status
//! - `Hero`, `FeatureCards`, `CtaBand`, `Footer`: the marketing sections
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `ParametersForm`: topic input, selectors and submit button
//! - `TextArea`: multi-line editor for the generated essay
//! - `PreviewState` / `Preview`: the output tab, editor or rendered view
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into the
//! core `App`. The event loop syncs props before each draw:
//!
//! ```rust,ignore
//! tui.form.can_submit = app.can_submit();
//! tui.form.generating = app.is_generating();
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (top navigation bar)
//! ├── landing.rs          (hero, feature cards, call to action, footer)
//! ├── parameters_form.rs  (Generator tab)
//! ├── preview.rs          (Preview tab)
//! └── text_area/          (multi-line editor)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod landing;
pub use landing::{CtaBand, FeatureCards, Footer, Hero};

pub mod parameters_form;
pub use parameters_form::{FormEvent, ParametersForm};

pub mod preview;
pub use preview::{Preview, PreviewEvent, PreviewState};

pub mod text_area;
