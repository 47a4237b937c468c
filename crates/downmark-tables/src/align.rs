//! Per-column alignment and its `text-align` style parser.

use std::sync::LazyLock;

use regex::Regex;

use downmark_dom::DomNode;

/// Matches an explicit `text-align` declaration inside a `style` attribute.
static TEXT_ALIGN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"text-align:\s*(left|right|center)").unwrap());

/// Column alignment, declared in GFM by the separator row's colon markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// No declared alignment; renders without colon markers.
    #[default]
    None,
    /// Left-align (`:---`).
    Left,
    /// Right-align (`---:`).
    Right,
    /// Center (`:---:`).
    Center,
}

impl Alignment {
    /// Parse the alignment declared by a `style` attribute value.
    ///
    /// Only an explicit `text-align: left|right|center` declaration
    /// counts, wherever it sits among other declarations. Anything else
    /// is [`Alignment::None`].
    #[must_use]
    pub fn from_style(style: &str) -> Self {
        let Some(captures) = TEXT_ALIGN_RE.captures(style) else {
            return Self::None;
        };
        match &captures[1] {
            "left" => Self::Left,
            "right" => Self::Right,
            "center" => Self::Center,
            _ => Self::None,
        }
    }
}

/// Alignment hint carried by a cell element's `style` attribute.
pub(crate) fn cell_alignment<N: DomNode>(cell: &N) -> Alignment {
    cell.attribute("style")
        .map_or(Alignment::None, Alignment::from_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use downmark_dom::TreeNode;

    #[test]
    fn test_from_style_left() {
        assert_eq!(Alignment::from_style("text-align: left"), Alignment::Left);
    }

    #[test]
    fn test_from_style_right_no_space() {
        assert_eq!(Alignment::from_style("text-align:right"), Alignment::Right);
    }

    #[test]
    fn test_from_style_center_among_other_declarations() {
        assert_eq!(
            Alignment::from_style("color: red; text-align: center; width: 10px"),
            Alignment::Center
        );
    }

    #[test]
    fn test_from_style_unrelated_properties() {
        assert_eq!(Alignment::from_style("font-weight: bold"), Alignment::None);
    }

    #[test]
    fn test_from_style_unsupported_value() {
        assert_eq!(
            Alignment::from_style("text-align: justify"),
            Alignment::None
        );
    }

    #[test]
    fn test_cell_alignment_without_style() {
        let cell = TreeNode::element("td");
        assert_eq!(cell_alignment(&cell), Alignment::None);
    }

    #[test]
    fn test_cell_alignment_with_style() {
        let cell = TreeNode::element("th").with_attr("style", "text-align: center");
        assert_eq!(cell_alignment(&cell), Alignment::Center);
    }
}
