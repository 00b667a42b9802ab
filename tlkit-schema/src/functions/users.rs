use crate::enums;

tl_function! {
    /// `users.getUsers#0d91a548 id:Vector<InputUser> = Vector<User>;`
    pub struct GetUsers => 0x0d91a548, "users.getUsers" {
        pub id: Vec<enums::InputUser>,
    } -> Vec<enums::User>
}

tl_function! {
    /// `users.getFullUser#b60f5918 id:InputUser = users.UserFull;`
    pub struct GetFullUser => 0xb60f5918, "users.getFullUser" {
        pub id: enums::InputUser,
    } -> enums::users::UserFull
}
