pub mod bridge;
pub mod reference;
