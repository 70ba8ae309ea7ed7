pub mod client;
pub mod entities;
pub mod goal;
pub mod painter;
pub mod transport;

#[cfg(test)]
pub mod testing;
