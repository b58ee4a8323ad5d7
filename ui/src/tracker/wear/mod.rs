mod session;
mod view;

pub use session::WearSession;
pub use view::WearView;
