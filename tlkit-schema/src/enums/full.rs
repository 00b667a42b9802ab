use crate::{layers, types};

tl_family! {
    /// [`PeerSettings`](https://core.telegram.org/type/PeerSettings)
    pub enum PeerSettings as "PeerSettings" {
        PeerSettings(types::PeerSettings),
    }
    legacy {
        layers::PeerSettingsLayer123,
    }
}

tl_family! {
    /// [`NotificationSound`](https://core.telegram.org/type/NotificationSound)
    pub enum NotificationSound as "NotificationSound" {
        Default(types::NotificationSoundDefault),
        None(types::NotificationSoundNone),
        Local(types::NotificationSoundLocal),
        Ringtone(types::NotificationSoundRingtone),
    }
}

tl_family! {
    /// [`PeerNotifySettings`](https://core.telegram.org/type/PeerNotifySettings)
    pub enum PeerNotifySettings as "PeerNotifySettings" {
        PeerNotifySettings(types::PeerNotifySettings),
    }
    legacy {
        layers::PeerNotifySettingsLayer139,
    }
}

tl_family! {
    /// [`BotCommand`](https://core.telegram.org/type/BotCommand)
    pub enum BotCommand as "BotCommand" {
        BotCommand(types::BotCommand),
    }
}

tl_family! {
    /// [`BotMenuButton`](https://core.telegram.org/type/BotMenuButton)
    pub enum BotMenuButton as "BotMenuButton" {
        Default(types::BotMenuButtonDefault),
        Commands(types::BotMenuButtonCommands),
        BotMenuButton(types::BotMenuButton),
    }
}

tl_family! {
    /// [`BotInfo`](https://core.telegram.org/type/BotInfo)
    pub enum BotInfo as "BotInfo" {
        BotInfo(types::BotInfo),
    }
    legacy {
        layers::BotInfoLayer139,
        layers::BotInfoLayer132,
    }
}

tl_family! {
    /// [`PremiumGiftOption`](https://core.telegram.org/type/PremiumGiftOption)
    pub enum PremiumGiftOption as "PremiumGiftOption" {
        PremiumGiftOption(types::PremiumGiftOption),
    }
}

tl_family! {
    /// [`UserFull`](https://core.telegram.org/type/UserFull)
    pub enum UserFull as "UserFull" {
        UserFull(types::UserFull),
    }
    legacy {
        layers::UserFullLayer143,
        layers::UserFullLayer132,
    }
}
