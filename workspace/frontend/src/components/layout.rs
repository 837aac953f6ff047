mod navbar;
mod view;

pub use view::Layout;
