use std::rc::Rc;
use yew::Reducible;

/// Which movie, if any, the detail panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(String),
}

#[derive(Debug)]
pub enum SelectionAction {
    /// Clicking a row: opens it, or closes it if it is already open.
    Toggle(String),
    Close,
}

impl Selection {
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::Selected(id) => Some(id),
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SelectionAction::Toggle(id) if self.selected_id() == Some(id.as_str()) => Selection::Idle,
            SelectionAction::Toggle(id) => Selection::Selected(id),
            SelectionAction::Close => Selection::Idle,
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Selection, action: SelectionAction) -> Selection {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn selecting_opens_the_movie() {
        let state = apply(Selection::Idle, SelectionAction::Toggle("tt1375666".into()));
        assert_eq!(state.selected_id(), Some("tt1375666"));
    }

    #[test]
    fn selecting_twice_toggles_back_to_idle() {
        let state = apply(Selection::Idle, SelectionAction::Toggle("tt1375666".into()));
        let state = apply(state, SelectionAction::Toggle("tt1375666".into()));
        assert_eq!(state, Selection::Idle);
    }

    #[test]
    fn selecting_another_movie_switches() {
        let state = apply(
            Selection::Selected("tt1375666".into()),
            SelectionAction::Toggle("tt0133093".into()),
        );
        assert_eq!(state, Selection::Selected("tt0133093".into()));
    }

    #[test]
    fn close_always_idles() {
        assert_eq!(apply(Selection::Idle, SelectionAction::Close), Selection::Idle);
        assert_eq!(
            apply(Selection::Selected("tt1375666".into()), SelectionAction::Close),
            Selection::Idle
        );
    }
}
