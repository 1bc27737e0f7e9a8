pub mod layout;

pub use layout::AuthLayout;
