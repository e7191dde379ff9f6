pub mod email;
pub mod fetch;
pub mod slots;
