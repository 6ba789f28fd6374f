use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use thiserror::Error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Assets the shell cannot render without. Checked once at startup so a
/// broken build aborts immediately instead of limping along unstyled.
const REQUIRED_ASSETS: &[&str] = &["main.css", "icon.svg"];

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static ICON_DATA_URI: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error)]
#[error("missing embedded asset: {name}")]
pub struct MissingAsset {
    pub name: &'static str,
}

/// Fails when any required asset is absent from the embedded set.
pub fn verify() -> Result<(), MissingAsset> {
    for name in REQUIRED_ASSETS {
        if EmbeddedAssets::get(name).is_none() {
            return Err(MissingAsset { name });
        }
    }
    Ok(())
}

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Returns a data URI for the window/favicon icon.
pub fn icon_data_uri() -> &'static str {
    ICON_DATA_URI
        .get_or_init(|| {
            let asset = load_asset("icon.svg");
            format!("data:image/svg+xml;base64,{}", encode_base64(asset.as_ref()))
        })
        .as_str()
}

fn load_text(name: &str) -> String {
    let asset = load_asset(name);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {name} is not valid UTF-8"))
}

// Required assets are checked by verify() before launch, so a miss here
// is a programming error rather than a runtime condition.
fn load_asset(name: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(name)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"))
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let mut word = (chunk[0] as u32) << 16;
        if let Some(&b) = chunk.get(1) {
            word |= (b as u32) << 8;
        }
        if let Some(&b) = chunk.get(2) {
            word |= b as u32;
        }

        output.push(TABLE[(word >> 18) as usize & 0x3f] as char);
        output.push(TABLE[(word >> 12) as usize & 0x3f] as char);
        output.push(if chunk.len() > 1 {
            TABLE[(word >> 6) as usize & 0x3f] as char
        } else {
            '='
        });
        output.push(if chunk.len() > 2 {
            TABLE[word as usize & 0x3f] as char
        } else {
            '='
        });
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn required_assets_are_embedded() {
        verify().expect("required assets missing from embed");
        assert!(!main_css().is_empty());
        assert!(icon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn base64_handles_all_tail_lengths() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }
}
