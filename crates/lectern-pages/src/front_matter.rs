//! YAML front matter parsing for markdown pages.
//!
//! A page may start with a `---` fenced YAML block. Only the fields that
//! affect the page index are read; everything else is ignored.

use serde::Deserialize;

/// Keywords may be written as a YAML list or a comma-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Keywords {
    List(Vec<String>),
    Text(String),
}

impl Keywords {
    fn into_vec(self) -> Vec<String> {
        let raw = match self {
            Self::List(list) => list,
            Self::Text(text) => text.split(',').map(str::to_owned).collect(),
        };
        raw.into_iter()
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .collect()
    }
}

#[derive(Deserialize, Default)]
struct RawFrontMatter {
    title: Option<String>,
    description: Option<String>,
    keywords: Option<Keywords>,
    #[serde(default)]
    draft: bool,
    published: Option<bool>,
}

/// Fields read from a page's front matter.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    /// False when the page is marked `draft: true` or `published: false`.
    pub published: bool,
}

impl FrontMatter {
    /// Front matter of a page without any overrides.
    pub(crate) fn empty() -> Self {
        Self {
            title: None,
            description: None,
            keywords: Vec::new(),
            published: true,
        }
    }
}

/// Split a markdown document into its front matter block and body.
///
/// A leading byte order mark is skipped. Returns `(None, content)` when the
/// document has no front matter.
pub(crate) fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }

    // Unterminated block: treat the whole file as body
    (None, content)
}

/// Parse front matter YAML.
///
/// Returns `None` if the YAML is malformed. Empty front matter yields a
/// published page with no overrides.
pub(crate) fn parse_front_matter(yaml: &str) -> Option<FrontMatter> {
    let trimmed = yaml.trim();
    let raw: RawFrontMatter = if trimmed.is_empty() {
        RawFrontMatter::default()
    } else {
        serde_yaml::from_str(trimmed).ok()?
    };

    Some(FrontMatter {
        title: raw.title.filter(|t| !t.trim().is_empty()),
        description: raw.description.filter(|d| !d.trim().is_empty()),
        keywords: raw.keywords.map(Keywords::into_vec).unwrap_or_default(),
        published: !raw.draft && raw.published.unwrap_or(true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_without_front_matter() {
        let (fm, body) = split_front_matter("# Title\n\nBody");
        assert!(fm.is_none());
        assert_eq!(body, "# Title\n\nBody");
    }

    #[test]
    fn test_split_with_front_matter() {
        let (fm, body) = split_front_matter("---\ntitle: Grace\n---\n# Heading\n");
        assert_eq!(fm, Some("title: Grace\n"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_split_crlf_front_matter() {
        let (fm, body) = split_front_matter("---\r\ntitle: Grace\r\n---\r\nBody");
        assert_eq!(fm, Some("title: Grace\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_front_matter_after_bom() {
        let (fm, body) = split_front_matter("\u{feff}---\ndraft: true\n---\n# Secret\n");
        assert_eq!(fm, Some("draft: true\n"));
        assert_eq!(body, "# Secret\n");
    }

    #[test]
    fn test_split_bom_without_front_matter() {
        let (fm, body) = split_front_matter("\u{feff}# Title\n");
        assert!(fm.is_none());
        assert_eq!(body, "# Title\n");
    }

    #[test]
    fn test_split_unterminated_front_matter() {
        let content = "---\ntitle: Grace\n# Heading";
        let (fm, body) = split_front_matter(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_all_fields() {
        let fm = parse_front_matter(
            "title: Justification\ndescription: By faith alone\nkeywords: [faith, grace]",
        )
        .unwrap();
        assert_eq!(fm.title.as_deref(), Some("Justification"));
        assert_eq!(fm.description.as_deref(), Some("By faith alone"));
        assert_eq!(fm.keywords, vec!["faith", "grace"]);
        assert!(fm.published);
    }

    #[test]
    fn test_parse_comma_separated_keywords() {
        let fm = parse_front_matter("keywords: \"faith, grace , ,works\"").unwrap();
        assert_eq!(fm.keywords, vec!["faith", "grace", "works"]);
    }

    #[test]
    fn test_parse_draft_is_unpublished() {
        assert!(!parse_front_matter("draft: true").unwrap().published);
        assert!(!parse_front_matter("published: false").unwrap().published);
        assert!(parse_front_matter("published: true").unwrap().published);
    }

    #[test]
    fn test_parse_empty_front_matter() {
        let fm = parse_front_matter("  \n").unwrap();
        assert_eq!(fm, FrontMatter::empty());
    }

    #[test]
    fn test_parse_invalid_yaml_returns_none() {
        assert!(parse_front_matter("title: [unclosed").is_none());
    }
}
