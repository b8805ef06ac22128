#![allow(dead_code)]

pub mod corpus;
pub mod source_fixtures;
