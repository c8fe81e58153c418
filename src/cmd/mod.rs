mod configure;
mod export;
mod extract;
mod import;
mod search;

pub use configure::configure;
pub use export::{export, read_keepers};
pub use extract::{domain, tweet};
pub use import::{import, import_bookmarks};
pub use search::query;
