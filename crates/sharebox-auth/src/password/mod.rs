//! Argon2id password hashing and sign-up password policy.

pub mod hasher;
pub mod policy;

pub use hasher::PasswordHasher;
pub use policy::check_password_policy;
