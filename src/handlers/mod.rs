pub mod health;
pub mod keys;
pub mod validate;

pub use health::health_handler;
pub use keys::keys_handler;
pub use validate::validate_handler;
