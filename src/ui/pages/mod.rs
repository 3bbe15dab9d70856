//! Application pages module
//!
//! This module contains all the page components for the site:
//! - Landing page (home)
//! - Sign-in, sign-up and password reset pages
//! - Not found page

mod landing;
mod not_found;
mod reset_password;
mod sign_in;
mod sign_up;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use reset_password::ResetPasswordPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
