//! Terminal Hyperlinks
//!
//! Clickable labels via OSC 8 where the terminal advertises support, and a
//! readable `label (url)` fallback everywhere else.

use crate::style::Fragment;

/// Whether the terminal renders OSC 8 hyperlinks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HyperlinkSupport {
    Supported,
    #[default]
    Unsupported,
}

impl HyperlinkSupport {
    /// Detect support from environment lookups
    ///
    /// `FORCE_HYPERLINK` wins when set (`0` disables). Otherwise only a
    /// terminal known to speak OSC 8 gets links.
    pub fn detect(lookup: impl Fn(&str) -> Option<String>, is_terminal: bool) -> Self {
        if let Some(force) = lookup("FORCE_HYPERLINK") {
            return if force.trim() == "0" {
                Self::Unsupported
            } else {
                Self::Supported
            };
        }

        if !is_terminal {
            return Self::Unsupported;
        }

        let known = lookup("WT_SESSION").is_some()
            || lookup("DOMTERM").is_some()
            || lookup("KONSOLE_VERSION").is_some()
            || lookup("VTE_VERSION")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .is_some_and(|v| v >= 5000)
            || lookup("TERM_PROGRAM").is_some_and(|p| {
                matches!(p.as_str(), "iTerm.app" | "WezTerm" | "vscode" | "ghostty")
            })
            || lookup("TERM").is_some_and(|t| matches!(t.as_str(), "xterm-kitty" | "xterm-ghostty"));

        if known {
            Self::Supported
        } else {
            Self::Unsupported
        }
    }
}

/// Render `label` as a link to `url`
///
/// Unsupported terminals get the label followed by the URL in parentheses,
/// in the label's colors.
pub fn link(label: Fragment, url: &str, support: HyperlinkSupport) -> Vec<Fragment> {
    match support {
        HyperlinkSupport::Supported => vec![label.linked(url)],
        HyperlinkSupport::Unsupported => {
            let suffix = Fragment {
                text: format!(" ({url})"),
                link: None,
                ..label.clone()
            };
            vec![label, suffix]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_force_overrides_everything() {
        assert_eq!(
            HyperlinkSupport::detect(vars(&[("FORCE_HYPERLINK", "1")]), false),
            HyperlinkSupport::Supported
        );
        assert_eq!(
            HyperlinkSupport::detect(
                vars(&[("FORCE_HYPERLINK", "0"), ("TERM_PROGRAM", "WezTerm")]),
                true
            ),
            HyperlinkSupport::Unsupported
        );
    }

    #[test]
    fn test_not_a_terminal() {
        assert_eq!(
            HyperlinkSupport::detect(vars(&[("TERM_PROGRAM", "iTerm.app")]), false),
            HyperlinkSupport::Unsupported
        );
    }

    #[test]
    fn test_known_terminals() {
        for pairs in [
            vec![("TERM_PROGRAM", "iTerm.app")],
            vec![("WT_SESSION", "abc")],
            vec![("VTE_VERSION", "6003")],
            vec![("TERM", "xterm-kitty")],
        ] {
            assert_eq!(
                HyperlinkSupport::detect(vars(&pairs), true),
                HyperlinkSupport::Supported,
                "{pairs:?}"
            );
        }
        assert_eq!(
            HyperlinkSupport::detect(vars(&[("VTE_VERSION", "4200")]), true),
            HyperlinkSupport::Unsupported
        );
        assert_eq!(
            HyperlinkSupport::detect(vars(&[("TERM", "xterm-256color")]), true),
            HyperlinkSupport::Unsupported
        );
    }

    #[test]
    fn test_link_supported() {
        let fragments = link(Fragment::plain("site"), "https://x.dev", HyperlinkSupport::Supported);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].link.as_deref(), Some("https://x.dev"));
    }

    #[test]
    fn test_link_fallback_keeps_label() {
        let fragments = link(
            Fragment::plain("site"),
            "https://x.dev",
            HyperlinkSupport::Unsupported,
        );
        let text: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(text, "site (https://x.dev)");
        assert!(fragments.iter().all(|f| f.link.is_none()));
    }
}
