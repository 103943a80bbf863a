mod account;
mod cart;
mod class;
mod enrollment;
