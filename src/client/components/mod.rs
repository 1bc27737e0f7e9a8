pub mod auth;
pub mod layout;
pub mod load_error;
pub mod navbar;
pub mod page;
pub mod skeleton;
pub mod title;

pub use auth::AuthLayout;
pub use layout::DefaultLayout;
pub use load_error::LoadErrorBanner;
pub use navbar::Navbar;
pub use page::Page;
pub use skeleton::LoadingSkeleton;
pub use title::SlideshowTitleButton;
