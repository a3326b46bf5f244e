pub mod medicines;
pub mod session;
