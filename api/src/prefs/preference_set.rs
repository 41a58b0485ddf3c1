use super::preference::Preference;
use crate::product::ProductId;

/// Liked and disliked product ids.
///
/// An id is never present in both lists. Both lists keep insertion order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PreferenceSet {
    liked: Vec<ProductId>,
    disliked: Vec<ProductId>,
}

/// Which lists a toggle touched.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Touched {
    pub liked: bool,
    pub disliked: bool,
}

impl PreferenceSet {
    /// Builds a set from restored lists, taken as stored.
    pub fn from_lists(liked: Vec<ProductId>, disliked: Vec<ProductId>) -> Self {
        Self { liked, disliked }
    }

    pub fn liked(&self) -> &[ProductId] {
        &self.liked
    }

    pub fn disliked(&self) -> &[ProductId] {
        &self.disliked
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.liked.contains(&id)
    }

    pub fn is_disliked(&self, id: ProductId) -> bool {
        self.disliked.contains(&id)
    }

    pub fn preference(&self, id: ProductId) -> Preference {
        if self.is_liked(id) {
            Preference::Liked
        } else if self.is_disliked(id) {
            Preference::Disliked
        } else {
            Preference::Neutral
        }
    }

    pub fn toggle_like(&mut self, id: ProductId) -> Touched {
        let (liked, disliked) = toggle(&mut self.liked, &mut self.disliked, id);
        Touched { liked, disliked }
    }

    pub fn toggle_dislike(&mut self, id: ProductId) -> Touched {
        let (disliked, liked) = toggle(&mut self.disliked, &mut self.liked, id);
        Touched { liked, disliked }
    }
}

/// Removes `id` from `target` if present; otherwise moves it from `other`
/// into `target`. Returns whether each list changed.
fn toggle(target: &mut Vec<ProductId>, other: &mut Vec<ProductId>, id: ProductId) -> (bool, bool) {
    if target.contains(&id) {
        target.retain(|&x| x != id);
        return (true, false);
    }
    let len_before = other.len();
    other.retain(|&x| x != id);
    target.push(id);
    (true, other.len() != len_before)
}
