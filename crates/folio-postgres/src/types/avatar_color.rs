//! Avatar color enumeration for comment author badges.

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
#[cfg(feature = "schema")]
use utoipa::ToSchema;

/// Fixed palette for comment author avatar badges.
///
/// This enumeration corresponds to the `AVATAR_COLOR` PostgreSQL enum. A color
/// is chosen pseudo-randomly when a comment is created and stored immutably so
/// the author badge keeps the same color on every render.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(ToSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::AvatarColor"]
pub enum AvatarColor {
    #[db_rename = "blue"]
    #[serde(rename = "blue")]
    Blue,
    #[db_rename = "green"]
    #[serde(rename = "green")]
    Green,
    #[db_rename = "purple"]
    #[serde(rename = "purple")]
    Purple,
    #[db_rename = "orange"]
    #[serde(rename = "orange")]
    Orange,
    #[db_rename = "red"]
    #[serde(rename = "red")]
    Red,
    #[db_rename = "cyan"]
    #[serde(rename = "cyan")]
    Cyan,
}

impl AvatarColor {
    /// The full palette, in a stable order suitable for indexed selection.
    pub const PALETTE: [AvatarColor; 6] = [
        AvatarColor::Blue,
        AvatarColor::Green,
        AvatarColor::Purple,
        AvatarColor::Orange,
        AvatarColor::Red,
        AvatarColor::Cyan,
    ];
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn palette_covers_every_variant() {
        for color in AvatarColor::iter() {
            assert!(AvatarColor::PALETTE.contains(&color));
        }
        assert_eq!(AvatarColor::PALETTE.len(), AvatarColor::iter().count());
    }
}
