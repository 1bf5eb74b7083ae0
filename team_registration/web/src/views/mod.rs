mod not_found;
mod register;

pub use not_found::NotFound;
pub use register::Register;
