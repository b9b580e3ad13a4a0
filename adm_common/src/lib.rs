pub mod hashing;
mod secret;

pub use secret::Secret;
