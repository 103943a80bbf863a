use crate::server::{
    data::class::ClassRepository,
    error::AppError,
    model::class::{ClassSort, ClassStatus, CreateClassParam, ListClassesParam, UpdateClassParam},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory, factory::class_offering::ClassOfferingFactory};

mod create;
mod list;
mod set_status;
mod update;
