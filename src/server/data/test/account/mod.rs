use crate::server::{
    data::account::AccountRepository,
    error::AppError,
    model::account::{CreateAccountOutcome, CreateAccountParam, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_role;
mod set_role;

fn param(email: &str) -> CreateAccountParam {
    CreateAccountParam {
        email: email.to_string(),
        name: "Ansel".to_string(),
        photo_url: None,
    }
}
