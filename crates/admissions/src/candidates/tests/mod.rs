mod common;
mod sql;
