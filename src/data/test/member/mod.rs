use crate::{data::member::MemberRepository, model::member::SignupParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
