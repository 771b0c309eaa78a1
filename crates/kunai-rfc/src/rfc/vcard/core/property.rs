//! Content line descriptor.

use super::escaped::PreEscaped;
use super::parameter::VCardParameter;

/// One unfolded content line: `[group.]NAME[;PARAM[=VALUE]]*:VALUE`.
///
/// Name, group, and parameters are copied verbatim, in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name.
    pub name: String,
    /// Parameters in output order. Duplicates are kept.
    pub params: Vec<VCardParameter>,
    /// Escaped value.
    pub value: PreEscaped,
}

impl ContentLine {
    #[must_use]
    pub fn new(name: impl Into<String>, value: PreEscaped) -> Self {
        Self {
            group: None,
            name: name.into(),
            params: Vec::new(),
            value,
        }
    }

    /// Sets the group prefix.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    /// Appends several parameters, keeping their order.
    #[must_use]
    pub fn with_params(mut self, params: impl IntoIterator<Item = VCardParameter>) -> Self {
        self.params.extend(params);
        self
    }

    /// Builds the unfolded logical line.
    #[must_use]
    pub fn assemble(&self) -> String {
        let mut line = String::with_capacity(
            self.name.len() + self.value.as_str().len() + self.params.len() * 16 + 16,
        );

        if let Some(ref group) = self.group {
            line.push_str(group);
            line.push('.');
        }

        line.push_str(&self.name);

        for param in &self.params {
            line.push(';');
            line.push_str(&param.name);
            if let Some(ref value) = param.value {
                line.push('=');
                line.push_str(value);
            }
        }

        line.push(':');
        line.push_str(self.value.as_str());

        line
    }
}
