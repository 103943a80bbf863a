//! Request guards and extractors shared by the controllers.

pub mod auth;
pub mod extract;

#[cfg(test)]
mod test;
