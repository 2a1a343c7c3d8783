//! PHPDoc blocks for generated methods

/// Documentation for one generated method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    pub summary: String,
    pub detail: String,
    /// `(type, description)` pairs rendered as `@param` lines
    pub params: Vec<(String, String)>,
    pub return_type: String,
}

impl MethodDoc {
    pub fn new(summary: impl Into<String>, detail: impl Into<String>, return_type: &str) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
            params: Vec::new(),
            return_type: return_type.to_string(),
        }
    }

    /// Add a `@param` line
    pub fn param(mut self, php_type: &str, description: &str) -> Self {
        self.params
            .push((php_type.to_string(), description.to_string()));
        self
    }

    /// Render the block, wrapping summary and detail at `width` columns
    pub fn render(&self, width: usize) -> String {
        let mut doc = String::from("\t/**\n");
        for line in wrap_line(&self.summary, width) {
            doc.push_str(&format!("\t * {}\n", line));
        }
        doc.push_str("\t *\n");
        for (php_type, description) in &self.params {
            doc.push_str(&format!("\t * @param {} {}\n", php_type, description));
        }
        for line in wrap_line(&self.detail, width) {
            doc.push_str(&format!("\t * {}\n", line));
        }
        doc.push_str(&format!("\t * @return {}\n", self.return_type));
        doc.push_str("\t*/\n");
        doc
    }
}

/// Split text longer than `width` characters at spaces.
///
/// From each line start, look at the character `width` places ahead and back
/// up to the nearest space; the line ends there and the next one starts after
/// the space. If the window has no space the line runs to the next space
/// after it, so words are never cut.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut start = 0;
    while chars.len() - start > width {
        let end = start + width;
        let split = (start..=end)
            .rev()
            .find(|&i| chars[i] == ' ')
            .or_else(|| (end + 1..chars.len()).find(|&i| chars[i] == ' '));

        let Some(split) = split else {
            break;
        };
        if split > start {
            lines.push(chars[start..split].iter().collect());
        }
        start = split + 1;
    }
    lines.push(chars[start..].iter().collect());
    lines
}
