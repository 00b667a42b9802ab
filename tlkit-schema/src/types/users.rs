//! `users.*` constructors.

use crate::enums;

tl_struct! {
    /// `users.userFull#3b6d152e full_user:UserFull chats:Vector<Chat>
    /// users:Vector<User> = users.UserFull;`
    pub struct UserFull => 0x3b6d152e, "users.userFull" {
        pub full_user: enums::UserFull,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }
}
