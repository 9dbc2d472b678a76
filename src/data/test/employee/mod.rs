use crate::{
    catalog::Department,
    data::employee::EmployeeRepository,
    error::AppError,
    model::employee::{CreateEmployeeParams, UpdateEmployeeParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_username;
mod get_all;
mod update;
