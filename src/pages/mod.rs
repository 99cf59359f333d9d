pub mod artists;
pub mod films;
pub mod home;
