//! Reducer for the responsive root.

use crate::ui::mvi::Reducer;

use super::intent::RootIntent;
use super::state::RootState;

/// Pure transitions; the component mounts and drops screens around dispatch.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Intent = RootIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RootIntent::Mount { width } => {
                let mounted = Some(state.breakpoints.classify(width));
                RootState {
                    width,
                    mounted,
                    ..state
                }
            }

            // No coalescing: every notification overwrites the width.
            RootIntent::Resize { width } if state.is_mounted() => RootState { width, ..state },
            RootIntent::Resize { .. } => state,

            RootIntent::Render if state.is_mounted() => RootState {
                mounted: Some(state.target()),
                renders: state.renders + 1,
                ..state
            },
            RootIntent::Render => state,

            RootIntent::Unmount => RootState {
                mounted: None,
                ..state
            },
        }
    }
}
