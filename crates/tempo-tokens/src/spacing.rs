//! Spacing scale. Every step sits on a 4pt grid.

pub const SPACING_UNIT: f32 = 4.0;

pub const SPACE_XS: f32 = 4.0;
pub const SPACE_SM: f32 = 8.0;
pub const SPACE_MD: f32 = 16.0;
pub const SPACE_LG: f32 = 24.0;
pub const SPACE_XL: f32 = 32.0;
pub const SPACE_XXL: f32 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 6] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xxl,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            SpacingToken::Xs => "xs",
            SpacingToken::Sm => "sm",
            SpacingToken::Md => "md",
            SpacingToken::Lg => "lg",
            SpacingToken::Xl => "xl",
            SpacingToken::Xxl => "xxl",
        }
    }

    pub const fn value(self) -> f32 {
        match self {
            SpacingToken::Xs => SPACE_XS,
            SpacingToken::Sm => SPACE_SM,
            SpacingToken::Md => SPACE_MD,
            SpacingToken::Lg => SPACE_LG,
            SpacingToken::Xl => SPACE_XL,
            SpacingToken::Xxl => SPACE_XXL,
        }
    }
}
