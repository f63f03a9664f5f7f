//! Macros for declaring menu trees.

/// Build a `Vec<NavEntry>` from a nested literal description.
///
/// A label followed by a page expression is a leaf; a label followed by a
/// bracketed list is a section with that submenu.
///
/// # Example
///
/// ```
/// use waymark::menu;
/// use waymark::Page;
///
/// let entries = menu! {
///     "Corporate" => [
///         "About Us" => Page::AboutUs,
///         "Board of Directors" => Page::Board,
///     ],
///     "Contact" => Page::Contact,
/// };
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].children().len(), 2);
/// assert_eq!(entries[1].page, Some(Page::Contact));
/// ```
#[macro_export]
macro_rules! menu {
    (@push $entries:ident;) => {};

    (@push $entries:ident; $label:literal => [ $($inner:tt)* ] $(, $($rest:tt)*)?) => {
        $entries.push($crate::catalog::NavEntry::section($label, $crate::menu!($($inner)*)));
        $crate::menu!(@push $entries; $($($rest)*)?);
    };

    (@push $entries:ident; $label:literal => $page:expr $(, $($rest:tt)*)?) => {
        $entries.push($crate::catalog::NavEntry::leaf($label, $page));
        $crate::menu!(@push $entries; $($($rest)*)?);
    };

    () => {
        ::std::vec::Vec::<$crate::catalog::NavEntry>::new()
    };

    ($($body:tt)+) => {{
        let mut entries = ::std::vec::Vec::<$crate::catalog::NavEntry>::new();
        $crate::menu!(@push entries; $($body)+);
        entries
    }};
}

#[cfg(test)]
mod tests {
    use crate::catalog::NavEntry;
    use crate::core::Page;

    #[test]
    fn menu_macro_builds_leaves_and_sections() {
        let entries = menu! {
            "Projects" => [
                "W2 Cu-Ni-PGE" => Page::ProjectsW2,
                "Royalty Portfolio" => Page::ProjectsRoyalty,
            ],
            "News" => Page::News,
        };

        assert_eq!(
            entries,
            vec![
                NavEntry::section(
                    "Projects",
                    vec![
                        NavEntry::leaf("W2 Cu-Ni-PGE", Page::ProjectsW2),
                        NavEntry::leaf("Royalty Portfolio", Page::ProjectsRoyalty),
                    ]
                ),
                NavEntry::leaf("News", Page::News),
            ]
        );
    }

    #[test]
    fn menu_macro_accepts_missing_trailing_comma() {
        let entries = menu! { "Contact" => Page::Contact };
        assert_eq!(entries, vec![NavEntry::leaf("Contact", Page::Contact)]);
    }

    #[test]
    fn empty_menu_macro_is_empty() {
        let entries = menu! {};
        assert!(entries.is_empty());
    }
}
