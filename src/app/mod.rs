pub mod menu;

pub use menu::{perform, run_menu, MenuAction};
