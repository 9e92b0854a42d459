use core::fmt;
use std::collections::HashMap;

use super::TemplateDataSource;

/// Text with `{{key}}` placeholders.
///
/// Values come from an optional [`TemplateDataSource`] and from the caller;
/// caller values take precedence. Unknown placeholders are left untouched.
pub struct Template {
    content: String,
    data_source: Option<Box<dyn TemplateDataSource>>,
}

impl Template {
    pub fn new<T, D>(content: T, data_source: D) -> Self
    where
        T: Into<String>,
        D: TemplateDataSource + 'static,
    {
        Self {
            content: content.into(),
            data_source: Some(Box::new(data_source)),
        }
    }

    pub fn simple<T>(content: T) -> Self
    where
        T: Into<String>,
    {
        Self { content: content.into(), data_source: None }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub async fn compile(&self, data: &HashMap<String, String>) -> String {
        let mut values = match &self.data_source {
            Some(source) => source.get_values().await,
            None => HashMap::new(),
        };
        values.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));

        values.iter().fold(self.content.clone(), |filled, (key, value)| {
            filled.replace(&format!("{{{{{key}}}}}"), value)
        })
    }
}

impl Clone for Template {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            data_source: self.data_source.as_ref().map(|s| s.clone_data_source()),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("content", &self.content)
            .field(
                "data_source",
                &self.data_source.as_ref().map(|_| "Some(Box<dyn TemplateDataSource>)").unwrap_or("None"),
            )
            .finish()
    }
}
