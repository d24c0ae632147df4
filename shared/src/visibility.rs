use crate::sequence::{Latches, Stage};

/// Which sub-views are mounted. Anything left `false` must be unmounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleViews {
    pub backdrop: bool,
    pub prompt_modal: bool,
    pub wheel: bool,
    pub particles: bool,
    pub result_message: bool,
}

impl VisibleViews {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

pub fn visible_views(stage: Stage, latches: &Latches) -> VisibleViews {
    match stage {
        Stage::Idle | Stage::Closed => VisibleViews::none(),
        Stage::Prompt => VisibleViews {
            backdrop: true,
            prompt_modal: !latches.start_taken,
            ..VisibleViews::none()
        },
        Stage::Spinning => VisibleViews {
            backdrop: true,
            wheel: true,
            ..VisibleViews::none()
        },
        Stage::Celebrating => VisibleViews {
            backdrop: true,
            particles: true,
            ..VisibleViews::none()
        },
        // Once claimed the message stays unmounted for the rest of this opening.
        Stage::Result => VisibleViews {
            backdrop: true,
            particles: !latches.completion_fired,
            result_message: latches.result_shown && !latches.completion_fired,
            ..VisibleViews::none()
        },
    }
}
