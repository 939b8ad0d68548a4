//! Console presentation: theme, terminal detection, prompts and views.
//!
//! Views return `String`s; only commands write to the terminal.

pub mod blocks {
    pub mod summary;
}
pub mod context;
pub mod live_region;
pub mod output;
pub mod primitives {
    pub mod border;
    pub mod icon;
    pub mod text;
}
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views {
    pub mod changes;
    pub mod commit;
    pub mod copy;
    pub mod sites;
}
pub mod widgets {
    pub mod r#box;
    pub mod spinner;
}
