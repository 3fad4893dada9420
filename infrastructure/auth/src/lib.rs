pub mod jwt;
pub mod password;

pub use jwt::JwtTokenService;
pub use password::Argon2PasswordHasher;
