use crate::types;

tl_family! {
    /// [`KeyboardButton`](https://core.telegram.org/type/KeyboardButton)
    pub enum KeyboardButton as "KeyboardButton" {
        KeyboardButton(types::KeyboardButton),
        Url(types::KeyboardButtonUrl),
        Callback(types::KeyboardButtonCallback),
        RequestPhone(types::KeyboardButtonRequestPhone),
        SwitchInline(types::KeyboardButtonSwitchInline),
    }
}

tl_family! {
    /// [`KeyboardButtonRow`](https://core.telegram.org/type/KeyboardButtonRow)
    pub enum KeyboardButtonRow as "KeyboardButtonRow" {
        KeyboardButtonRow(types::KeyboardButtonRow),
    }
}

tl_family! {
    /// [`ReplyMarkup`](https://core.telegram.org/type/ReplyMarkup)
    pub enum ReplyMarkup as "ReplyMarkup" {
        ReplyKeyboardHide(types::ReplyKeyboardHide),
        ReplyKeyboardForceReply(types::ReplyKeyboardForceReply),
        ReplyKeyboardMarkup(types::ReplyKeyboardMarkup),
        ReplyInlineMarkup(types::ReplyInlineMarkup),
    }
}
