use crate::enums;

tl_function! {
    /// `messages.getMessages#63c66506 id:Vector<InputMessage> = messages.Messages;`
    pub struct GetMessages => 0x63c66506, "messages.getMessages" {
        pub id: Vec<enums::InputMessage>,
    } -> enums::messages::Messages
}

tl_function! {
    /// `messages.checkChatInvite#3eadb1bb hash:string = ChatInvite;`
    pub struct CheckChatInvite => 0x3eadb1bb, "messages.checkChatInvite" {
        pub hash: String,
    } -> enums::ChatInvite
}
