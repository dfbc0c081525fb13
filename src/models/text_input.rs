/// 한 줄 입력 버퍼 (바이트 오프셋 커서)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 커서 앞쪽 문자 수 (화면 위치 계산용)
    pub fn cursor_chars(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// 전체 값 교체, 커서는 끝으로
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_char_start();
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_start();
        }
    }

    pub fn right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        self.cursor = self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Ctrl+W: 커서 앞 단어 삭제
    pub fn delete_prev_word(&mut self) {
        let mut pos = self.cursor;
        while pos > 0 {
            let prev = Self::char_start_before(&self.value, pos);
            if !self.value[prev..pos].starts_with(char::is_whitespace) {
                break;
            }
            pos = prev;
        }
        while pos > 0 {
            let prev = Self::char_start_before(&self.value, pos);
            if self.value[prev..pos].starts_with(char::is_whitespace) {
                break;
            }
            pos = prev;
        }
        self.value.replace_range(pos..self.cursor, "");
        self.cursor = pos;
    }

    fn prev_char_start(&self) -> usize {
        Self::char_start_before(&self.value, self.cursor)
    }

    fn char_start_before(value: &str, pos: usize) -> usize {
        value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
