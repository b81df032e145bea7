pub mod client;
pub mod monta;
#[cfg(test)]
mod testing;
pub mod tibber;
