//! Magic-byte sniffing of recovered payloads.
//!
//! Classification is purely structural: only a fixed byte prefix is
//! inspected, never the remaining content. A text payload that happens to
//! start with one of the known signatures is misclassified; that is an
//! accepted limitation of the heuristic.

use std::fmt;

/// How many leading bytes are scanned for the `LAME` encoder tag of
/// header-less MP3 streams.
const MP3_SCAN_LEN: usize = 50;

/// Payload categories recognized by the sniffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Audio,
    Text,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Audio => "audio",
            ContentKind::Text => "text",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a byte buffer by its magic prefix, first match wins.
///
/// Returns the category together with the canonical file extension, or
/// `None` for plain text.
pub fn sniff(data: &[u8]) -> (ContentKind, Option<&'static str>) {
    if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        return (ContentKind::Image, Some(".png"));
    }

    if data.starts_with(&[0xFF, 0xD8]) {
        return (ContentKind::Image, Some(".jpg"));
    }

    if data.starts_with(b"RIFF") && data.len() >= 12 && &data[8..12] == b"WAVE" {
        return (ContentKind::Audio, Some(".wav"));
    }

    if data.starts_with(b"ID3") || contains_lame_tag(data) {
        return (ContentKind::Audio, Some(".mp3"));
    }

    (ContentKind::Text, None)
}

fn contains_lame_tag(data: &[u8]) -> bool {
    let head = &data[..data.len().min(MP3_SCAN_LEN)];
    head.windows(4).any(|w| w == b"LAME")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_png_by_prefix_only() {
        // the rest of the buffer is garbage on purpose
        let mut data = vec![0x89, b'P', b'N', b'G'];
        data.extend_from_slice(b"anything at all");

        assert_eq!(sniff(&data), (ContentKind::Image, Some(".png")));
    }

    #[test]
    fn should_classify_jpeg() {
        assert_eq!(
            sniff(&[0xFF, 0xD8, 0xFF, 0xE0]),
            (ContentKind::Image, Some(".jpg"))
        );
    }

    #[test]
    fn should_classify_wav_only_with_wave_at_offset_8() {
        let mut wav = b"RIFF".to_vec();
        wav.extend_from_slice(&1234u32.to_le_bytes());
        wav.extend_from_slice(b"WAVEfmt ");
        assert_eq!(sniff(&wav), (ContentKind::Audio, Some(".wav")));

        // RIFF container without the WAVE form type is not audio
        let mut avi = b"RIFF".to_vec();
        avi.extend_from_slice(&1234u32.to_le_bytes());
        avi.extend_from_slice(b"AVI fmt ");
        assert_eq!(sniff(&avi), (ContentKind::Text, None));
    }

    #[test]
    fn should_classify_mp3_by_id3_prefix() {
        assert_eq!(sniff(b"ID3\x04\x00"), (ContentKind::Audio, Some(".mp3")));
    }

    #[test]
    fn should_classify_mp3_by_lame_tag_within_the_first_50_bytes() {
        let mut data = vec![0u8; 30];
        data.extend_from_slice(b"LAME3.100");
        assert_eq!(sniff(&data), (ContentKind::Audio, Some(".mp3")));

        let mut late = vec![0u8; 60];
        late.extend_from_slice(b"LAME3.100");
        assert_eq!(sniff(&late), (ContentKind::Text, None));
    }

    #[test]
    fn should_fall_back_to_text() {
        assert_eq!(sniff(b"hello world"), (ContentKind::Text, None));
        assert_eq!(sniff(b""), (ContentKind::Text, None));
    }

    #[test]
    fn should_not_read_past_a_short_buffer() {
        assert_eq!(sniff(b"RIFF1234"), (ContentKind::Text, None));
        assert_eq!(sniff(b"LAM"), (ContentKind::Text, None));
    }
}
