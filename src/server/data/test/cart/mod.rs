use crate::server::{data::cart::CartRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_items_by_student;
