//! Authentication implementations.

mod hosted;
mod jwt;

pub use hosted::{HostedAuthConfig, HostedIdentityProvider};
pub use jwt::{JwtConfig, JwtTokenService};
