use crate::{
    catalog::{Department, Section},
    data::unit::UnitRepository,
    error::AppError,
    model::unit::CreateUnitParams,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update_type;
