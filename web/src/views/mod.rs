mod home;
mod map;
mod not_found;

pub use home::HomePage;
pub use map::MapPage;
pub use not_found::NotFound;
