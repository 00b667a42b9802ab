use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_unit!(
    /// `geoPointEmpty#1117dd5f = GeoPoint;`
    GeoPointEmpty => 0x1117dd5f, "geoPointEmpty"
);

/// `geoPoint#b2a2f663 flags:# long:double lat:double access_hash:long
/// accuracy_radius:flags.0?int = GeoPoint;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub long: f64,
    pub lat: f64,
    pub access_hash: i64,
    /// Metres.
    pub accuracy_radius: Option<i32>,
}

tl_id!(GeoPoint => 0xb2a2f663, "geoPoint");

impl GeoPoint {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.accuracy_radius.is_some())
    }
}

impl Serializable for GeoPoint {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.long.serialize(buf);
        self.lat.serialize(buf);
        self.access_hash.serialize(buf);
        self.accuracy_radius.serialize(buf);
    }
}

impl Deserializable for GeoPoint {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            long: f64::deserialize(buf)?,
            lat: f64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            accuracy_radius: flags.read(0, buf)?,
        })
    }
}

// ─── MessageMedia ────────────────────────────────────────────────────────────

tl_unit!(
    /// `messageMediaEmpty#3ded6320 = MessageMedia;`
    MessageMediaEmpty => 0x3ded6320, "messageMediaEmpty"
);

/// `messageMediaPhoto#695150d7 flags:# spoiler:flags.3?true photo:flags.0?Photo
/// ttl_seconds:flags.2?int = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageMediaPhoto {
    pub spoiler: bool,
    pub photo: Option<enums::Photo>,
    pub ttl_seconds: Option<i32>,
}

tl_id!(MessageMediaPhoto => 0x695150d7, "messageMediaPhoto");

impl MessageMediaPhoto {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.photo.is_some())
            .with(2, self.ttl_seconds.is_some())
            .with(3, self.spoiler)
    }
}

impl Serializable for MessageMediaPhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.photo.serialize(buf);
        self.ttl_seconds.serialize(buf);
    }
}

impl Deserializable for MessageMediaPhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            spoiler: flags.has(3),
            photo: flags.read(0, buf)?,
            ttl_seconds: flags.read(2, buf)?,
        })
    }
}

tl_struct! {
    /// `messageMediaGeo#56e0d474 geo:GeoPoint = MessageMedia;`
    pub struct MessageMediaGeo => 0x56e0d474, "messageMediaGeo" {
        pub geo: enums::GeoPoint,
    }
}

tl_struct! {
    /// `messageMediaContact#70322949 phone_number:string first_name:string
    /// last_name:string vcard:string user_id:long = MessageMedia;`
    pub struct MessageMediaContact => 0x70322949, "messageMediaContact" {
        pub phone_number: String,
        pub first_name: String,
        pub last_name: String,
        pub vcard: String,
        pub user_id: i64,
    }
}

tl_unit!(
    /// `messageMediaUnsupported#9f84f49e = MessageMedia;`
    MessageMediaUnsupported => 0x9f84f49e, "messageMediaUnsupported"
);

tl_struct! {
    /// `messageMediaVenue#2ec0533f geo:GeoPoint title:string address:string
    /// provider:string venue_id:string venue_type:string = MessageMedia;`
    pub struct MessageMediaVenue => 0x2ec0533f, "messageMediaVenue" {
        pub geo: enums::GeoPoint,
        pub title: String,
        pub address: String,
        pub provider: String,
        pub venue_id: String,
        pub venue_type: String,
    }
}

/// `messageMediaGeoLive#b940c666 flags:# geo:GeoPoint heading:flags.0?int
/// period:int proximity_notification_radius:flags.1?int = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageMediaGeoLive {
    pub geo: enums::GeoPoint,
    pub heading: Option<i32>,
    pub period: i32,
    pub proximity_notification_radius: Option<i32>,
}

tl_id!(MessageMediaGeoLive => 0xb940c666, "messageMediaGeoLive");

impl MessageMediaGeoLive {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.heading.is_some())
            .with(1, self.proximity_notification_radius.is_some())
    }
}

impl Serializable for MessageMediaGeoLive {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.geo.serialize(buf);
        self.heading.serialize(buf);
        self.period.serialize(buf);
        self.proximity_notification_radius.serialize(buf);
    }
}

impl Deserializable for MessageMediaGeoLive {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            geo: enums::GeoPoint::deserialize(buf)?,
            heading: flags.read(0, buf)?,
            period: i32::deserialize(buf)?,
            proximity_notification_radius: flags.read(1, buf)?,
        })
    }
}

tl_struct! {
    /// `messageMediaDice#3f7ee58b value:int emoticon:string = MessageMedia;`
    pub struct MessageMediaDice => 0x3f7ee58b, "messageMediaDice" {
        pub value: i32,
        pub emoticon: String,
    }
}
