pub mod about;
pub mod not_found;
pub mod slide_show;

pub use about::About;
pub use not_found::NotFound;
pub use slide_show::SlideShow;
