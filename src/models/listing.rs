/// Query parameters understood by Reddit's listing endpoints.
///
/// Every field left at its zero value is omitted from the request, so
/// `ListingOptions::default()` adds nothing. `before` and `after` take the
/// opaque cursors returned with the previous page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub limit: u32,
    pub count: u32,
    pub before: String,
    pub after: String,
    pub show: String,
    pub depth: u32,
    pub sort: String,
    pub comment: String,
}

impl ListingOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_after(mut self, after: &str) -> Self {
        self.after = after.to_string();
        self
    }

    pub fn with_before(mut self, before: &str) -> Self {
        self.before = before.to_string();
        self
    }

    /// The non-default fields as form pairs, in a fixed order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("limit", number(self.limit)),
            ("count", number(self.count)),
            ("before", text(&self.before)),
            ("after", text(&self.after)),
            ("show", text(&self.show)),
            ("depth", number(self.depth)),
            ("sort", text(&self.sort)),
            ("comment", text(&self.comment)),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
    }
}

fn number(value: u32) -> Option<String> {
    (value != 0).then(|| value.to_string())
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
