use tlkit_wire::{Buffer, Deserializable, Flags, Result, Serializable};

use crate::enums;

tl_struct! {
    /// `photoSizeEmpty#0e17e23c type:string = PhotoSize;`
    pub struct PhotoSizeEmpty => 0x0e17e23c, "photoSizeEmpty" {
        pub r#type: String,
    }
}

tl_struct! {
    /// `photoSize#75c78e60 type:string w:int h:int size:int = PhotoSize;`
    pub struct PhotoSize => 0x75c78e60, "photoSize" {
        pub r#type: String,
        pub w: i32,
        pub h: i32,
        pub size: i32,
    }
}

tl_struct! {
    /// `photoCachedSize#021e1ad6 type:string w:int h:int bytes:bytes = PhotoSize;`
    pub struct PhotoCachedSize => 0x021e1ad6, "photoCachedSize" {
        pub r#type: String,
        pub w: i32,
        pub h: i32,
        pub bytes: Vec<u8>,
    }
}

tl_struct! {
    /// `photoStrippedSize#e0b0bc2e type:string bytes:bytes = PhotoSize;`
    pub struct PhotoStrippedSize => 0xe0b0bc2e, "photoStrippedSize" {
        pub r#type: String,
        pub bytes: Vec<u8>,
    }
}

tl_struct! {
    /// `photoSizeProgressive#fa3efb95 type:string w:int h:int sizes:Vector<int> = PhotoSize;`
    pub struct PhotoSizeProgressive => 0xfa3efb95, "photoSizeProgressive" {
        pub r#type: String,
        pub w: i32,
        pub h: i32,
        pub sizes: Vec<i32>,
    }
}

tl_struct! {
    /// `photoPathSize#d8214d41 type:string bytes:bytes = PhotoSize;`
    pub struct PhotoPathSize => 0xd8214d41, "photoPathSize" {
        pub r#type: String,
        pub bytes: Vec<u8>,
    }
}

/// `videoSize#de33b094 flags:# type:string w:int h:int size:int
/// video_start_ts:flags.0?double = VideoSize;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoSize {
    pub r#type: String,
    pub w: i32,
    pub h: i32,
    pub size: i32,
    pub video_start_ts: Option<f64>,
}

tl_id!(VideoSize => 0xde33b094, "videoSize");

impl VideoSize {
    pub fn flags(&self) -> Flags {
        Flags::empty().with(0, self.video_start_ts.is_some())
    }
}

impl Serializable for VideoSize {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.r#type.serialize(buf);
        self.w.serialize(buf);
        self.h.serialize(buf);
        self.size.serialize(buf);
        self.video_start_ts.serialize(buf);
    }
}

impl Deserializable for VideoSize {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            r#type: String::deserialize(buf)?,
            w: i32::deserialize(buf)?,
            h: i32::deserialize(buf)?,
            size: i32::deserialize(buf)?,
            video_start_ts: flags.read(0, buf)?,
        })
    }
}

tl_struct! {
    /// `photoEmpty#2331b22d id:long = Photo;`
    pub struct PhotoEmpty => 0x2331b22d, "photoEmpty" {
        pub id: i64,
    }
}

/// `photo#fb197a65 flags:# has_stickers:flags.0?true id:long access_hash:long
/// file_reference:bytes date:int sizes:Vector<PhotoSize>
/// video_sizes:flags.1?Vector<VideoSize> dc_id:int = Photo;`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Photo {
    pub has_stickers: bool,
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Vec<u8>,
    pub date: i32,
    pub sizes: Vec<enums::PhotoSize>,
    pub video_sizes: Option<Vec<enums::VideoSize>>,
    pub dc_id: i32,
}

tl_id!(Photo => 0xfb197a65, "photo");

impl Photo {
    pub fn flags(&self) -> Flags {
        Flags::empty()
            .with(0, self.has_stickers)
            .with(1, self.video_sizes.is_some())
    }
}

impl Serializable for Photo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.flags().serialize(buf);
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.file_reference.serialize(buf);
        self.date.serialize(buf);
        self.sizes.serialize(buf);
        self.video_sizes.serialize(buf);
        self.dc_id.serialize(buf);
    }
}

impl Deserializable for Photo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = Flags::deserialize(buf)?;
        Ok(Self {
            has_stickers: flags.has(0),
            id: i64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            file_reference: Vec::<u8>::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            sizes: Vec::deserialize(buf)?,
            video_sizes: flags.read(1, buf)?,
            dc_id: i32::deserialize(buf)?,
        })
    }
}
