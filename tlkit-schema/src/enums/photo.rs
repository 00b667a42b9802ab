use crate::{layers, types};

tl_family! {
    /// [`PhotoSize`](https://core.telegram.org/type/PhotoSize)
    pub enum PhotoSize as "PhotoSize" {
        Empty(types::PhotoSizeEmpty),
        PhotoSize(types::PhotoSize),
        PhotoCachedSize(types::PhotoCachedSize),
        PhotoStrippedSize(types::PhotoStrippedSize),
        Progressive(types::PhotoSizeProgressive),
        PhotoPathSize(types::PhotoPathSize),
    }
}

tl_family! {
    /// [`VideoSize`](https://core.telegram.org/type/VideoSize)
    pub enum VideoSize as "VideoSize" {
        VideoSize(types::VideoSize),
    }
}

tl_family! {
    /// [`Photo`](https://core.telegram.org/type/Photo)
    pub enum Photo as "Photo" {
        Empty(types::PhotoEmpty),
        Photo(types::Photo),
    }
}

tl_family! {
    /// [`GeoPoint`](https://core.telegram.org/type/GeoPoint)
    pub enum GeoPoint as "GeoPoint" {
        Empty(types::GeoPointEmpty),
        GeoPoint(types::GeoPoint),
    }
    legacy {
        layers::GeoPointLayer118,
    }
}

tl_family! {
    /// [`MessageMedia`](https://core.telegram.org/type/MessageMedia)
    pub enum MessageMedia as "MessageMedia" {
        Empty(types::MessageMediaEmpty),
        Photo(types::MessageMediaPhoto),
        Geo(types::MessageMediaGeo),
        Contact(types::MessageMediaContact),
        Unsupported(types::MessageMediaUnsupported),
        Venue(types::MessageMediaVenue),
        GeoLive(types::MessageMediaGeoLive),
        Dice(types::MessageMediaDice),
    }
    legacy {
        layers::MessageMediaContactLayer132,
        layers::MessageMediaGeoLiveLayer118,
    }
}
