//! `users.*` families.

use crate::types;

tl_family! {
    /// [`users.UserFull`](https://core.telegram.org/type/users.UserFull)
    pub enum UserFull as "users.UserFull" {
        UserFull(types::users::UserFull),
    }
}
