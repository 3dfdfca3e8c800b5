//! Version dispatch for (snapshot, mask) payloads

use tracing::debug;
use wardrobe_core::{AppearanceSnapshot, ApplyMask, DecodeError, Design};

use crate::{current, legacy, text, DecodeOptions, WireVersion, APPLICATION_ID};

/// A successfully decoded payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub snapshot: AppearanceSnapshot,
    pub mask: ApplyMask,
    pub version: WireVersion,
    /// Producer byte of a current-version payload; legacy layouts carry none
    pub application: Option<u8>,
}

impl Decoded {
    /// Wrap into an unnamed design
    pub fn into_design(self) -> Design {
        Design::anonymous(self.snapshot, self.mask)
    }
}

/// Appearance codec
#[derive(Clone, Copy, Debug, Default)]
pub struct Codec {
    options: DecodeOptions,
}

impl Codec {
    pub fn new(options: DecodeOptions) -> Self {
        Codec { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Encode at the given version under the default application id
    pub fn encode(snapshot: &AppearanceSnapshot, mask: &ApplyMask, version: WireVersion) -> Vec<u8> {
        Self::encode_as(snapshot, mask, version, APPLICATION_ID)
    }

    /// Encode at the given version under the configured application id
    pub fn encode_with(
        &self,
        snapshot: &AppearanceSnapshot,
        mask: &ApplyMask,
        version: WireVersion,
    ) -> Vec<u8> {
        Self::encode_as(snapshot, mask, version, self.options.application_id)
    }

    fn encode_as(
        snapshot: &AppearanceSnapshot,
        mask: &ApplyMask,
        version: WireVersion,
        application_id: u8,
    ) -> Vec<u8> {
        let mut buf = Vec::with_capacity(version.encoded_len());
        match version {
            WireVersion::V1 | WireVersion::V2 | WireVersion::V3 => {
                legacy::encode(snapshot, mask, version, &mut buf)
            }
            WireVersion::V4 => current::encode(snapshot, mask, application_id, &mut buf),
        }
        debug_assert_eq!(buf.len(), version.encoded_len());
        buf
    }

    /// Re-encode a decoded payload at `target`. A current-version payload
    /// keeps its producer byte; anything else is stamped with the configured id.
    pub fn reencode(&self, decoded: &Decoded, target: WireVersion) -> Vec<u8> {
        let application_id = decoded
            .application
            .unwrap_or(self.options.application_id);
        Self::encode_as(&decoded.snapshot, &decoded.mask, target, application_id)
    }

    pub fn encode_design(design: &Design, version: WireVersion) -> Vec<u8> {
        Self::encode(design.snapshot(), design.mask(), version)
    }

    /// Decode any supported version. The version tag and the exact layout
    /// length are validated before any field is read.
    pub fn decode(&self, data: &[u8]) -> Result<Decoded, DecodeError> {
        let tag = *data.first().ok_or(DecodeError::Empty)?;
        let version = WireVersion::from_byte(tag).ok_or(DecodeError::UnknownVersion(tag))?;

        let expected = version.encoded_len();
        if data.len() < expected {
            return Err(DecodeError::Truncated {
                version: tag,
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            return Err(DecodeError::TrailingBytes {
                version: tag,
                expected,
                actual: data.len(),
            });
        }

        debug!(%version, "decoding design payload");
        let (snapshot, mask, application) = match version {
            WireVersion::V1 | WireVersion::V2 | WireVersion::V3 => {
                let (snapshot, mask) = legacy::decode(data, version)?;
                (snapshot, mask, None)
            }
            WireVersion::V4 => {
                let (snapshot, mask, application) = current::decode(data, &self.options)?;
                (snapshot, mask, Some(application))
            }
        };

        Ok(Decoded {
            snapshot,
            mask,
            version,
            application,
        })
    }

    /// Encode and wrap in base64
    pub fn to_text(snapshot: &AppearanceSnapshot, mask: &ApplyMask, version: WireVersion) -> String {
        text::encode_text(&Self::encode(snapshot, mask, version))
    }

    /// Encode under the configured application id and wrap in base64
    pub fn to_text_with(
        &self,
        snapshot: &AppearanceSnapshot,
        mask: &ApplyMask,
        version: WireVersion,
    ) -> String {
        text::encode_text(&self.encode_with(snapshot, mask, version))
    }

    /// Unwrap base64 and decode
    pub fn from_text(&self, input: &str) -> Result<Decoded, DecodeError> {
        let bytes = text::decode_text(input)?;
        self.decode(&bytes)
    }

    /// Re-encode a payload of any version at `target`
    pub fn migrate_text(&self, input: &str, target: WireVersion) -> Result<String, DecodeError> {
        let decoded = self.from_text(input)?;
        if decoded.version != target {
            debug!(from = %decoded.version, to = %target, "migrating design payload");
        }
        Ok(text::encode_text(&self.reencode(&decoded, target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_core::{EquipItem, EquipSlot, MetaFlag};

    fn sample() -> (AppearanceSnapshot, ApplyMask) {
        let mut s = AppearanceSnapshot::default();
        s.set_item(EquipSlot::MainHand, EquipItem::new(1000, 5));
        let mut m = ApplyMask::none();
        m.set_item(EquipSlot::MainHand, true);
        m.set_stain(EquipSlot::MainHand, true);
        (s, m)
    }

    #[test]
    fn test_current_roundtrip_is_exact() {
        let (s, m) = sample();
        let bytes = Codec::encode(&s, &m, WireVersion::CURRENT);
        let decoded = Codec::default().decode(&bytes).unwrap();

        assert_eq!(decoded.snapshot, s);
        assert_eq!(decoded.mask, m);
        assert_eq!(decoded.version, WireVersion::CURRENT);
        assert_eq!(
            Codec::encode(&decoded.snapshot, &decoded.mask, decoded.version),
            bytes
        );
    }

    #[test]
    fn test_every_version_reencodes_identically() {
        let (mut s, mut m) = sample();
        s.meta.hat_visible = true;
        s.meta.is_wet = true;
        m.set_meta(MetaFlag::Wet, true);
        m.write_protected = true;

        let codec = Codec::default();
        for v in WireVersion::ALL {
            let bytes = Codec::encode(&s, &m, v);
            let decoded = codec.decode(&bytes).unwrap();
            assert_eq!(decoded.version, v);
            assert_eq!(Codec::encode(&decoded.snapshot, &decoded.mask, v), bytes);
        }
    }

    #[test]
    fn test_empty_and_unknown_version() {
        let codec = Codec::default();
        assert_eq!(codec.decode(&[]).unwrap_err(), DecodeError::Empty);
        assert_eq!(
            codec.decode(&[0x09, 0, 0]).unwrap_err(),
            DecodeError::UnknownVersion(9)
        );
    }

    #[test]
    fn test_truncated_and_trailing() {
        let codec = Codec::default();
        let (s, m) = sample();
        let mut bytes = Codec::encode(&s, &m, WireVersion::V2);

        let err = codec.decode(&bytes[..50]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                version: 2,
                expected: 91,
                actual: 50
            }
        );

        bytes.push(0);
        let err = codec.decode(&bytes).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TrailingBytes {
                version: 2,
                expected: 91,
                actual: 92
            }
        );
    }

    #[test]
    fn test_migrate_to_legacy_and_back() {
        let codec = Codec::default();
        let (s, m) = sample();
        let current = Codec::to_text(&s, &m, WireVersion::V4);

        let old = codec.migrate_text(&current, WireVersion::V2).unwrap();
        let decoded = codec.from_text(&old).unwrap();
        assert_eq!(decoded.version, WireVersion::V2);
        assert_eq!(decoded.snapshot.item(EquipSlot::MainHand), EquipItem::new(1000, 5));
        assert!(decoded.mask.item(EquipSlot::MainHand));

        let back = codec.migrate_text(&old, WireVersion::V4).unwrap();
        assert_eq!(codec.from_text(&back).unwrap().version, WireVersion::V4);
    }

    #[test]
    fn test_into_design() {
        let (s, m) = sample();
        let design = Codec::default()
            .decode(&Codec::encode(&s, &m, WireVersion::V4))
            .unwrap()
            .into_design();
        assert_eq!(design.snapshot(), &s);
        assert_eq!(design.mask(), &m);
    }

    #[test]
    fn test_configured_application_id_roundtrip() {
        let (s, m) = sample();
        let codec = Codec::new(DecodeOptions {
            application_id: 0x10,
            accept_foreign: false,
        });

        let bytes = codec.encode_with(&s, &m, WireVersion::V4);
        assert_eq!(bytes[1], 0x10);
        let decoded = codec.decode(&bytes).unwrap();
        assert_eq!(decoded.application, Some(0x10));
        assert_eq!(decoded.snapshot, s);

        let text = codec.to_text_with(&s, &m, WireVersion::V4);
        assert!(codec.from_text(&text).is_ok());
        assert_eq!(
            Codec::default().from_text(&text).unwrap_err(),
            DecodeError::ForeignApplication(0x10)
        );
    }

    #[test]
    fn test_accepted_foreign_payload_reencodes_identically() {
        let (s, m) = sample();
        let mut bytes = Codec::encode(&s, &m, WireVersion::V4);
        bytes[1] = 0x21;
        let text = text::encode_text(&bytes);

        let lenient = Codec::new(DecodeOptions {
            accept_foreign: true,
            ..DecodeOptions::default()
        });
        let decoded = lenient.decode(&bytes).unwrap();
        assert_eq!(decoded.application, Some(0x21));
        assert_eq!(lenient.reencode(&decoded, WireVersion::V4), bytes);
        assert_eq!(lenient.migrate_text(&text, WireVersion::V4).unwrap(), text);
    }

    #[test]
    fn test_legacy_migration_stamps_configured_id() {
        let (s, m) = sample();
        let codec = Codec::new(DecodeOptions {
            application_id: 0x33,
            accept_foreign: false,
        });
        let legacy = Codec::to_text(&s, &m, WireVersion::V2);
        assert_eq!(codec.from_text(&legacy).unwrap().application, None);

        let current = codec.migrate_text(&legacy, WireVersion::V4).unwrap();
        assert_eq!(text::decode_text(&current).unwrap()[1], 0x33);
        assert_eq!(codec.from_text(&current).unwrap().application, Some(0x33));
    }
}
