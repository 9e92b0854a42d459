use std::{collections::HashMap, future::Future, pin::Pin};

pub type TemplateValuesFuture = Pin<Box<dyn Future<Output = HashMap<String, String>> + Send>>;

/// Supplies values for `{{placeholders}}` each time a [`Template`](super::Template) is compiled.
pub trait TemplateDataSource: Send + Sync {
    fn get_values(&self) -> TemplateValuesFuture;
    fn clone_data_source(&self) -> Box<dyn TemplateDataSource>;
}
