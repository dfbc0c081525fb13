use super::super::*;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::Submit => app.submit_query(),
        Action::StartVoice => app.start_voice_capture(),
        Action::ScrollUp => app.assistant.scroll_up(),
        Action::ScrollDown => {
            let lines = app.response_line_count();
            app.assistant.scroll_down(lines);
        }
        Action::CursorLeft => app.assistant.edit(|input| input.left()),
        Action::CursorRight => app.assistant.edit(|input| input.right()),
        Action::CursorHome => app.assistant.edit(|input| input.home()),
        Action::CursorEnd => app.assistant.edit(|input| input.end()),
        Action::DeleteBack => app.assistant.edit(|input| input.backspace()),
        Action::DeleteForward => app.assistant.edit(|input| input.delete()),
        Action::DeleteWord => app.assistant.edit(|input| input.delete_prev_word()),
        Action::ClearInput => app.assistant.edit(|input| input.clear()),
        _ => unreachable!("non-assistant action: {:?}", action),
    }
}
