//! UI screens.

mod app;
mod booking_screen;
mod gallery_screen;
mod home_screen;
mod login_screen;
mod main_screen;
mod pricing_screen;
mod signup_screen;
mod splash_screen;

pub use app::App;
pub use booking_screen::{BookingFocus, BookingScreen};
pub use gallery_screen::GalleryScreen;
pub use home_screen::{HomeAction, HomeFocus, HomeScreen};
pub use login_screen::{LoginAction, LoginFocus, LoginScreen, LoginState};
pub use main_screen::{MainAction, MainScreen};
pub use pricing_screen::PricingScreen;
pub use signup_screen::{SignupAction, SignupFocus, SignupScreen};
pub use splash_screen::SplashScreen;
