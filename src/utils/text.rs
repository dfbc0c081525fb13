use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 첫 글자만 대문자로 바꾼다. 나머지는 그대로 둔다.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 문자열을 최대 표시 너비에 맞춰 뒤쪽을 생략한다.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }

    let prefix = take_prefix_by_width(text, max_width - ELLIPSIS.width());
    format!("{}{}", prefix, ELLIPSIS)
}

/// 좌/우 문자열 사이를 공백으로 채워 한 줄 너비를 맞춘다.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    let padding = width.saturating_sub(used);
    format!("{}{}{}", left, " ".repeat(padding), right)
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw > max_width {
            break;
        }
        out.push(c);
        width += cw;
    }
    out
}
