pub mod connection;
pub mod entities;
pub mod migrations;

#[cfg(test)]
pub mod test_utils;
