/// Which photo panel, if any, has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(u32),
}

impl Selection {
    pub fn from_pick(id: Option<u32>) -> Self {
        match id {
            Some(id) => Selection::Selected(id),
            None => Selection::Unselected,
        }
    }

    pub fn id(&self) -> Option<u32> {
        match self {
            Selection::Selected(id) => Some(*id),
            Selection::Unselected => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pick() {
        assert_eq!(Selection::from_pick(Some(4)), Selection::Selected(4));
        assert_eq!(Selection::from_pick(None), Selection::Unselected);
        assert_eq!(Selection::Selected(4).id(), Some(4));
        assert!(!Selection::default().is_selected());
    }
}
