//! SeaORM entities for the photography school store.

pub mod prelude;

pub mod account;
pub mod cart_entry;
pub mod class_offering;
pub mod enrollment;
