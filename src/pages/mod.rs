pub mod footer;
pub mod home;

pub use footer::Footer;
pub use home::HomePage;
