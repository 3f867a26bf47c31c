pub mod roster;
pub mod teams;
