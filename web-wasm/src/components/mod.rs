//! UI部品

pub mod layout;
pub mod modal;
pub mod pagination;
pub mod spinner;
pub mod status_badge;
pub mod toast;

pub use layout::NavBar;
pub use modal::Modal;
pub use pagination::Pager;
pub use spinner::Spinner;
pub use status_badge::StatusBadge;
pub use toast::ToastStack;
