//! Emoji Asset URLs
//!
//! Maps an emoji string to its Noto image on the remote asset host.

/// Code points at or below this are never part of an asset name
pub const CODEPOINT_FLOOR: u32 = 0xfe;

fn is_variation_selector(cp: u32) -> bool {
    (0xfe00..=0xfe0f).contains(&cp)
}

/// Hyphen-joined lowercase hex code points, e.g. `1f1fa-1f1f8`
pub fn emoji_codepoints(emoji: &str) -> String {
    emoji
        .chars()
        .map(|c| c as u32)
        .filter(|&cp| cp > CODEPOINT_FLOOR && !is_variation_selector(cp))
        .map(|cp| format!("{:x}", cp))
        .collect::<Vec<_>>()
        .join("-")
}

/// Full image URL under `base`
pub fn emoji_to_url(base: &str, emoji: &str) -> String {
    format!("{}/{}/512.webp", base.trim_end_matches('/'), emoji_codepoints(emoji))
}

/// Result of rendering one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStep {
    Rendered,
    Skipped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderTally {
    pub rendered: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Runs `render` on every element; a failing element doesn't stop the rest
pub fn render_each<T, E>(
    elements: impl IntoIterator<Item = T>,
    mut render: impl FnMut(&T) -> Result<RenderStep, E>,
) -> RenderTally {
    let mut tally = RenderTally::default();
    for el in elements {
        match render(&el) {
            Ok(RenderStep::Rendered) => tally.rendered += 1,
            Ok(RenderStep::Skipped) => tally.skipped += 1,
            Err(_) => tally.failed += 1,
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://fonts.gstatic.com/s/e/notoemoji/latest";

    #[test]
    fn test_variation_selector_dropped() {
        assert_eq!(emoji_codepoints("❤️"), "2764");
        assert_eq!(
            emoji_to_url(BASE, "❤️"),
            "https://fonts.gstatic.com/s/e/notoemoji/latest/2764/512.webp"
        );
    }

    #[test]
    fn test_flag_is_two_segments() {
        assert_eq!(emoji_codepoints("🇺🇸"), "1f1fa-1f1f8");
    }

    #[test]
    fn test_zwj_sequence_keeps_joiner() {
        // 👨‍🍳
        assert_eq!(emoji_codepoints("\u{1f468}\u{200d}\u{1f373}"), "1f468-200d-1f373");
    }

    #[test]
    fn test_ascii_dropped() {
        assert_eq!(emoji_codepoints(" 🧺 "), "1f9fa");
    }

    #[test]
    fn test_failed_element_does_not_stop_the_rest() {
        let mut seen = Vec::new();
        let tally = render_each(vec!["🥛", "", "bad", "🧺"], |emoji: &&str| {
            seen.push(emoji.to_string());
            match *emoji {
                "" => Ok(RenderStep::Skipped),
                "bad" => Err("createElement failed"),
                _ => Ok(RenderStep::Rendered),
            }
        });
        assert_eq!(seen, vec!["🥛", "", "bad", "🧺"]);
        assert_eq!(tally, RenderTally { rendered: 2, skipped: 1, failed: 1 });
    }

    #[test]
    fn test_trailing_slash_in_base() {
        assert_eq!(emoji_to_url("https://x/", "🥛"), "https://x/1f95b/512.webp");
    }
}
