pub mod interface;
pub mod mac;
