mod conditions;
mod config;
mod derive;
mod dialects;
mod insert;
mod select;
mod update;
mod upsert;
