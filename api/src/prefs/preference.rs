/// A user's classification of a single product.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs, strum::IntoStaticStr)]
pub enum Preference {
    #[default]
    Neutral,
    Liked,
    Disliked,
}

impl Preference {
    /// The state reached from `self` by pressing "like".
    pub fn after_like(self) -> Self {
        match self {
            Self::Liked => Self::Neutral,
            Self::Neutral | Self::Disliked => Self::Liked,
        }
    }

    /// The state reached from `self` by pressing "dislike".
    pub fn after_dislike(self) -> Self {
        match self {
            Self::Disliked => Self::Neutral,
            Self::Neutral | Self::Liked => Self::Disliked,
        }
    }
}
