/// A type name split into its words.
///
/// Words break wherever a lowercase letter or digit is followed by an
/// uppercase letter, and at whitespace. `TreeData` is `["tree", "data"]`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let mut parts = vec![];

        for word in src.split_whitespace() {
            let mut current = String::new();
            let mut prev: Option<char> = None;

            for ch in word.chars() {
                if let Some(prev) = prev {
                    let boundary = (prev.is_lowercase() || prev.is_ascii_digit()) && ch.is_uppercase();
                    if boundary && !current.is_empty() {
                        parts.push(std::mem::take(&mut current));
                    }
                }

                current.extend(ch.to_lowercase());
                prev = Some(ch);
            }

            if !current.is_empty() {
                parts.push(current);
            }
        }

        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }
}
