mod dashboard;
pub use dashboard::{Dashboard, THEME_CSS};
