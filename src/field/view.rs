//! View rendering for the field.

use super::model::Field;

impl Field {
    /// Renders prompt, text and cursor on one line.
    pub(super) fn render(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.placeholder_view());
        }

        let mut v = String::new();
        let before: String = self.value[..self.pos].iter().collect();
        v.push_str(&self.text_style.render(&before));

        if self.focus {
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            v.push_str(&self.cursor_style.render(&under.to_string()));
            if self.pos + 1 < self.value.len() {
                let after: String = self.value[self.pos + 1..].iter().collect();
                v.push_str(&self.text_style.render(&after));
            }
        } else if self.pos < self.value.len() {
            let after: String = self.value[self.pos..].iter().collect();
            v.push_str(&self.text_style.render(&after));
        }

        format!("{}{}", prompt, v)
    }

    fn placeholder_view(&self) -> String {
        if !self.focus {
            return self.placeholder_style.render(&self.placeholder);
        }
        // Cursor sits on the first placeholder character.
        let mut chars = self.placeholder.chars();
        let first = chars.next().unwrap_or(' ');
        let rest: String = chars.collect();
        format!(
            "{}{}",
            self.cursor_style.render(&first.to_string()),
            self.placeholder_style.render(&rest)
        )
    }
}
