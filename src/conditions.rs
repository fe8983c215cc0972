//! Run conditions for controlling when presentation systems execute.

use bevy::prelude::*;

use crate::shell::RevealState;
use crate::ui::DialogState;

/// Run condition: returns true once the intro curtain has started opening.
///
/// Usage: `.run_if(is_revealed)`
pub fn is_revealed(reveal: Res<RevealState>) -> bool {
    reveal.content_visible()
}

/// Run condition: returns true when no modal dialog is open.
///
/// Usage: `.run_if(no_dialog_open)`
pub fn no_dialog_open(dialog_state: Res<DialogState>) -> bool {
    !dialog_state.any_modal_open
}
