use crate::{data::movement::MovementRepository, error::AppError, model::movement::MovementFilter};
use test_utils::{builder::TestBuilder, factory};

mod query;
