use crate::models::tag_enum;

tag_enum!(
    /// The ten accent palettes a portfolio can be themed with.
    ColorPalette {
        Blue => "blue",
        Purple => "purple",
        Emerald => "emerald",
        Rose => "rose",
        Amber => "amber",
        Slate => "slate",
        Cyan => "cyan",
        Indigo => "indigo",
        Orange => "orange",
        Teal => "teal",
    }
);
