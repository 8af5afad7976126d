use std::fmt;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    JoinLines,
    MaskedPattern,
}

impl Page {
    /// All pages in navigation order
    pub const ALL: [Page; 3] = [Page::Home, Page::JoinLines, Page::MaskedPattern];

    /// Resolve a route path. Unknown paths resolve to [`Page::Home`].
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "/join" | "join" => Page::JoinLines,
            "/pattern" | "pattern" => Page::MaskedPattern,
            _ => Page::Home,
        }
    }

    /// Route path for this page
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::JoinLines => "/join",
            Page::MaskedPattern => "/pattern",
        }
    }

    /// Heading shown at the top of the page
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Welcome",
            Page::JoinLines => "Join Lines",
            Page::MaskedPattern => "Masked Pattern",
        }
    }

    /// Position in [`Page::ALL`]; the window selects its visible page by this index
    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::JoinLines => 1,
            Page::MaskedPattern => 2,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/join"), Page::JoinLines);
        assert_eq!(Page::from_path("/pattern"), Page::MaskedPattern);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Page::from_path("/nope"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/JOIN"), Page::Home);
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(Page::from_path("/join/"), Page::JoinLines);
    }

    #[test]
    fn test_path_round_trip_and_index_order() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(Page::from_path(page.path()), *page);
            assert_eq!(page.index(), i);
        }
    }
}
