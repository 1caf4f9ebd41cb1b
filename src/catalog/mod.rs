mod builtin;
mod persistence;

pub use builtin::builtin_menu;
pub use persistence::{load_catalog, save_catalog};
