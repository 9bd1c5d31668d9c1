//! Image format and pixel dimension sniffing from file headers.
//!
//! Only the header bytes are read, so no image decoding library is needed.

/// Image container formats the store recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl ImageFormat {
    /// Detect the format from magic bytes.
    #[must_use]
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G']) {
            Some(Self::Png)
        } else if data.starts_with(&[0xFF, 0xD8]) {
            Some(Self::Jpeg)
        } else if data.starts_with(b"GIF") {
            Some(Self::Gif)
        } else if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            Some(Self::WebP)
        } else {
            None
        }
    }

    /// File extension including the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpeg => ".jpg",
            Self::Gif => ".gif",
            Self::WebP => ".webp",
        }
    }
}

/// Pixel `(width, height)` of an image, read from its header.
#[must_use]
pub fn image_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    match ImageFormat::sniff(data)? {
        ImageFormat::Png => png_dimensions(data),
        ImageFormat::Jpeg => jpeg_dimensions(data),
        ImageFormat::Gif => gif_dimensions(data),
        ImageFormat::WebP => webp_dimensions(data),
    }
}

/// PNG: width/height at bytes 16-23 in the IHDR chunk.
fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 24 {
        return None;
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Some((width, height))
}

/// GIF: logical screen size at bytes 6-9, little-endian.
fn gif_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if data.len() < 10 {
        return None;
    }
    let width = u32::from(u16::from_le_bytes([data[6], data[7]]));
    let height = u32::from(u16::from_le_bytes([data[8], data[9]]));
    Some((width, height))
}

/// JPEG: walk the segment list up to the first start-of-frame marker.
fn jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let mut i = 2;
    while i + 4 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // SOF markers, excluding DHT (C4), JPG (C8) and DAC (CC)
        if matches!(
            marker,
            0xC0 | 0xC1 | 0xC2 | 0xC3 | 0xC5 | 0xC6 | 0xC7 | 0xC9 | 0xCA | 0xCB | 0xCD | 0xCE | 0xCF
        ) && i + 9 < data.len()
        {
            let height = u32::from(u16::from_be_bytes([data[i + 5], data[i + 6]]));
            let width = u32::from(u16::from_be_bytes([data[i + 7], data[i + 8]]));
            return Some((width, height));
        }

        let length = usize::from(u16::from_be_bytes([data[i + 2], data[i + 3]]));
        i += 2 + length;
    }
    None
}

/// WebP: lossy (`VP8 `), lossless (`VP8L`) and extended (`VP8X`) layouts.
fn webp_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let chunk = data.get(12..16)?;
    match chunk {
        b"VP8X" => {
            let b = data.get(24..30)?;
            let width = 1 + u32::from_le_bytes([b[0], b[1], b[2], 0]);
            let height = 1 + u32::from_le_bytes([b[3], b[4], b[5], 0]);
            Some((width, height))
        }
        b"VP8 " => {
            let b = data.get(26..30)?;
            let width = u32::from(u16::from_le_bytes([b[0], b[1]]) & 0x3FFF);
            let height = u32::from(u16::from_le_bytes([b[2], b[3]]) & 0x3FFF);
            Some((width, height))
        }
        b"VP8L" => {
            if *data.get(20)? != 0x2F {
                return None;
            }
            let b = data.get(21..25)?;
            let (b0, b1, b2, b3) = (u32::from(b[0]), u32::from(b[1]), u32::from(b[2]), u32::from(b[3]));
            let width = 1 + (b0 | ((b1 & 0x3F) << 8));
            let height = 1 + ((b1 >> 6) | (b2 << 2) | ((b3 & 0x0F) << 10));
            Some((width, height))
        }
        _ => None,
    }
}

/// Synthetic image headers for unit tests.
#[cfg(test)]
pub(crate) mod fixtures {
    /// A PNG header declaring `width` x `height`, zero-padded to `len` bytes.
    pub fn png(width: u32, height: u32, len: usize) -> Vec<u8> {
        let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        data.extend_from_slice(&[0, 0, 0, 13]);
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data.resize(len.max(data.len()), 0);
        data
    }
}
