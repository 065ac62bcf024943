//! Label shortening for display.
//!
//! Unit names in a dump carry instance and path prefixes plus a type suffix
//! (`dev-disk-by\x2duuid-1234.device`, `getty@tty1.service`). For tree output
//! only the informative tail is kept.

/// Type words removed from labels.
const UNIT_TYPE_WORDS: [&str; 6] = ["service", "target", "device", "swap", "socket", "mount"];

/// Shorten a unit label for display.
///
/// Keeps the part after the last `\`, `|`, `:` or `@`, then removes every
/// occurrence of the unit type words, trimming trailing dots after each
/// removal.
pub fn format_label(label: &str) -> String {
    let tail = label
        .rsplit(['\\', '|', ':', '@'])
        .next()
        .unwrap_or(label);

    let mut cleaned = tail.to_string();
    for word in UNIT_TYPE_WORDS {
        cleaned = cleaned.replace(word, "");
        cleaned.truncate(cleaned.trim_end_matches('.').len());
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sshd.service", "sshd")]
    #[case("multi-user.target", "multi-user")]
    #[case("getty@tty1.service", "tty1")]
    #[case(r"dev-disk-by\x2duuid-1234.device", "x2duuid-1234")]
    #[case("systemd-fsck@dev-sda1.service", "dev-sda1")]
    #[case("init.scope", "init.scope")]
    #[case("dbus.socket", "dbus")]
    #[case("", "")]
    fn test_format_label(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_label(input), expected);
    }

    #[test]
    fn test_type_word_inside_name_is_removed_too() {
        // Substring removal, not word-boundary aware.
        assert_eq!(format_label("mountpoint.service"), "point");
    }
}
