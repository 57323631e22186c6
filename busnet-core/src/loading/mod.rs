//! This module is responsible for turning stop and route declarations
//! into a transit catalogue.

mod builder;
mod raw_types;

pub use builder::create_catalogue;
pub use raw_types::{BaseRequest, RouteDeclaration, StopDeclaration};
