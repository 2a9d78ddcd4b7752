/// A closed set of string tags (variant names, palette names, template ids).
///
/// Implemented through `tag_enum!` so that every enum round-trips through the
/// same kebab-case strings that appear in hand-edited JSON.
pub trait Tag: Copy + Sized + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == tag)
    }

    /// All tag strings, used when reporting invalid values.
    fn expected() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

/// Declares a closed tag enum with serde renames, `Tag` and `Display`.
macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $tag)] $variant,)+
        }

        impl $crate::models::Tag for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::models::Tag::as_str(self))
            }
        }
    };
}

pub(crate) use tag_enum;

pub mod resume;
pub mod sections;
pub mod template;
