use crate::types::{Coords, Extra, WorkoutKind};

/// Raw values typed into the workout form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    pub cadence: f64,
    pub elevation_gain: f64,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance: f64::NAN,
            duration: f64::NAN,
            cadence: f64::NAN,
            elevation_gain: f64::NAN,
        }
    }
}

impl FormInput {
    pub const fn running(distance: f64, duration: f64, cadence: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance,
            duration,
            cadence,
            elevation_gain: f64::NAN,
        }
    }

    pub const fn cycling(distance: f64, duration: f64, elevation_gain: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance,
            duration,
            cadence: f64::NAN,
            elevation_gain,
        }
    }

    /// Only the field that belongs to the selected type is read.
    pub const fn extra(&self) -> Extra {
        match self.kind {
            WorkoutKind::Running => Extra::Running {
                cadence: self.cadence,
            },
            WorkoutKind::Cycling => Extra::Cycling {
                elevation_gain: self.elevation_gain,
            },
        }
    }
}

/// Which type-specific row is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TertiaryField {
    Cadence,
    Elevation,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Hidden,
    /// Open, waiting for a submission at the clicked position.
    Shown { pending: Coords },
}

/// The new-workout form: hidden until the map is clicked.
#[derive(Debug, Clone)]
pub struct Form {
    state: FormState,
    kind: WorkoutKind,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            state: FormState::Hidden,
            kind: WorkoutKind::Running,
        }
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> FormState {
        self.state
    }

    pub const fn pending(&self) -> Option<Coords> {
        match self.state {
            FormState::Shown { pending } => Some(pending),
            FormState::Hidden => None,
        }
    }

    /// A map click opens the form; clicking again while open moves the pending position.
    pub fn show(&mut self, at: Coords) {
        self.state = FormState::Shown { pending: at };
    }

    /// Close after a successful submission and reset the type selector.
    pub fn hide(&mut self) {
        self.state = FormState::Hidden;
        self.kind = WorkoutKind::Running;
    }

    pub fn select_kind(&mut self, kind: WorkoutKind) -> TertiaryField {
        self.kind = kind;
        self.visible_field()
    }

    pub const fn visible_field(&self) -> TertiaryField {
        match self.kind {
            WorkoutKind::Running => TertiaryField::Cadence,
            WorkoutKind::Cycling => TertiaryField::Elevation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_shows_and_hide_resets() {
        let mut form = Form::new();
        assert_eq!(form.pending(), None);

        form.show(Coords::new(1.0, 2.0));
        form.show(Coords::new(3.0, 4.0));
        assert_eq!(form.pending(), Some(Coords::new(3.0, 4.0)));

        assert_eq!(form.select_kind(WorkoutKind::Cycling), TertiaryField::Elevation);
        form.hide();
        assert_eq!(form.state(), FormState::Hidden);
        assert_eq!(form.visible_field(), TertiaryField::Cadence);
    }

    #[test]
    fn extra_follows_selected_kind() {
        let input = FormInput {
            kind: WorkoutKind::Cycling,
            cadence: 180.0,
            elevation_gain: 12.0,
            ..FormInput::default()
        };
        assert_eq!(
            input.extra(),
            Extra::Cycling {
                elevation_gain: 12.0
            }
        );
    }
}
