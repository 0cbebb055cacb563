pub mod site;

pub use site::Site;
