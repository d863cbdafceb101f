//! Reusable UI components

pub mod checkout_button;
pub mod header;
pub mod layout;
pub mod loading;
pub mod route_guard;
pub mod sidebar;
pub mod toast;

pub use checkout_button::CheckoutButton;
pub use header::Header;
pub use layout::ConsoleLayout;
pub use loading::{LoadingOverlay, LoadingSpinner, Skeleton};
pub use route_guard::{ProtectedRoute, PublicOnlyRoute};
pub use sidebar::Sidebar;
pub use toast::{ToastNotifier, Toasts};
