//! Wire shape of `GET /auth/v1/user`.

use serde::Deserialize;

/// Only the user id is read; the rest of the profile is ignored.
#[derive(Debug, Deserialize)]
pub(super) struct AuthUserDto {
    pub(super) id: String,
}
