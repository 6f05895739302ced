//! Sibling-variant slug derivation.
//!
//! Product slugs are hyphen-delimited and end with capacity and color, e.g.
//! `apple-iphone-11-pro-64gb-spacegray`. Switching color or capacity on a
//! product page navigates to the sibling slug built here. Both functions
//! return an empty string when no navigation is possible.

/// Normalize a color name into slug form: lowercase, whitespace runs to `-`.
///
/// ```
/// use phone_catalog_core::variant::normalize_color;
///
/// assert_eq!(normalize_color("Space Gray"), "space-gray");
/// assert_eq!(normalize_color("rosegold"), "rosegold");
/// ```
#[must_use]
pub fn normalize_color(color: &str) -> String {
    color
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// A slug suffix names a known color either hyphenated (`space-gray`) or
/// compacted (`spacegray`), the latter being how catalog slugs spell it.
fn suffix_names_color(suffix: &str, known: &str) -> bool {
    suffix == known || suffix == known.replace('-', "")
}

/// Slug of the sibling variant in `new_color`.
///
/// The color tail of `slug` is located as the first segment index whose
/// suffix names one of `colors_available`; everything before it is kept and
/// the normalized new color appended. Without a recognizable color tail the
/// new color is appended to the whole slug.
///
/// Returns an empty string if `slug` or `colors_available` is missing.
///
/// ```
/// use phone_catalog_core::variant::color_sibling;
///
/// let colors = vec!["space gray".to_string(), "silver".to_string()];
/// assert_eq!(
///     color_sibling(Some("iphone-14-pro-64gb-spacegray"), Some(colors.as_slice()), "Silver"),
///     "iphone-14-pro-64gb-silver",
/// );
/// assert_eq!(color_sibling(None, Some(colors.as_slice()), "Silver"), "");
/// ```
#[must_use]
pub fn color_sibling(
    slug: Option<&str>,
    colors_available: Option<&[String]>,
    new_color: &str,
) -> String {
    let (Some(slug), Some(colors)) = (slug.filter(|s| !s.is_empty()), colors_available) else {
        return String::new();
    };

    let formatted = normalize_color(new_color);
    let known: Vec<String> = colors.iter().map(|c| normalize_color(c)).collect();
    let parts: Vec<&str> = slug.split('-').collect();

    let color_index = (0..parts.len()).find(|&i| {
        let suffix = parts.iter().skip(i).copied().collect::<Vec<_>>().join("-");
        known.iter().any(|k| suffix_names_color(&suffix, k))
    });

    let keep = color_index.unwrap_or(parts.len());
    parts
        .iter()
        .take(keep)
        .copied()
        .chain(std::iter::once(formatted.as_str()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug of the sibling variant with `new_capacity`.
///
/// Drops the trailing capacity and color segments of `slug`, then appends
/// `new_capacity` followed by `selected_color`. The color is the one the
/// viewer currently has selected, not necessarily the product's own, so a
/// color choice sticks across capacity changes.
///
/// Returns an empty string if `slug` is missing.
///
/// ```
/// use phone_catalog_core::variant::capacity_sibling;
///
/// assert_eq!(
///     capacity_sibling(Some("iphone-14-pro-64gb-spacegray"), "128gb", Some("silver")),
///     "iphone-14-pro-128gb-silver",
/// );
/// ```
#[must_use]
pub fn capacity_sibling(
    slug: Option<&str>,
    new_capacity: &str,
    selected_color: Option<&str>,
) -> String {
    let Some(slug) = slug.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let parts: Vec<&str> = slug.split('-').collect();
    let keep = parts.len().saturating_sub(2);
    let color = selected_color.map(normalize_color);

    parts
        .iter()
        .take(keep)
        .copied()
        .chain(std::iter::once(new_capacity))
        .chain(color.as_deref())
        .collect::<Vec<_>>()
        .join("-")
}
