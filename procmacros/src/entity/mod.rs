mod attributes;
mod generator;

pub(crate) use generator::generate_entity;
