use crate::{enums, types};

tl_struct! {
    /// `geoPoint#0296f104 long:double lat:double access_hash:long = GeoPoint;`
    pub struct GeoPointLayer118 => 0x0296f104, "geoPoint" {
        pub long: f64,
        pub lat: f64,
        pub access_hash: i64,
    }
}

impl From<GeoPointLayer118> for enums::GeoPoint {
    fn from(x: GeoPointLayer118) -> Self {
        types::GeoPoint {
            long: x.long,
            lat: x.lat,
            access_hash: x.access_hash,
            accuracy_radius: None,
        }
        .into()
    }
}

tl_struct! {
    /// `messageMediaContact#cbf24940 phone_number:string first_name:string
    /// last_name:string vcard:string user_id:int = MessageMedia;`
    pub struct MessageMediaContactLayer132 => 0xcbf24940, "messageMediaContact" {
        pub phone_number: String,
        pub first_name: String,
        pub last_name: String,
        pub vcard: String,
        pub user_id: i32,
    }
}

impl From<MessageMediaContactLayer132> for enums::MessageMedia {
    fn from(x: MessageMediaContactLayer132) -> Self {
        types::MessageMediaContact {
            phone_number: x.phone_number,
            first_name: x.first_name,
            last_name: x.last_name,
            vcard: x.vcard,
            user_id: x.user_id.into(),
        }
        .into()
    }
}

tl_struct! {
    /// `messageMediaGeoLive#7c3c2609 geo:GeoPoint period:int = MessageMedia;`
    pub struct MessageMediaGeoLiveLayer118 => 0x7c3c2609, "messageMediaGeoLive" {
        pub geo: enums::GeoPoint,
        pub period: i32,
    }
}

impl From<MessageMediaGeoLiveLayer118> for enums::MessageMedia {
    fn from(x: MessageMediaGeoLiveLayer118) -> Self {
        types::MessageMediaGeoLive {
            geo: x.geo,
            heading: None,
            period: x.period,
            proximity_notification_radius: None,
        }
        .into()
    }
}
