// UI module - composites status rows into a terminal frame using Ratatui
//
// Architecture:
// - icons: Terminal icon rendering (emoji and Nerd Fonts) with themes
// - row: Renders one StatusRow as a Paragraph (icon, path, detail, actions)

pub mod icons;
pub mod row;

pub use icons::{IconMode, IconRenderer, IconTheme};
pub use row::render_status_row;
