use super::super::*;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::MoveUp => app.move_selection_up(),
        Action::MoveDown => app.move_selection_down(),
        Action::Dial => app.dial_selected(),
        Action::Retry => app.retry_active_list(),
        Action::CycleDistrict => app.cycle_district(),
        _ => unreachable!("non-list action: {:?}", action),
    }
}
