mod data_source;
mod template;

pub use self::{
    data_source::{TemplateDataSource, TemplateValuesFuture},
    template::Template,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone)]
    pub struct StaticSource {
        data: HashMap<String, String>,
    }

    impl TemplateDataSource for StaticSource {
        fn get_values(&self) -> TemplateValuesFuture {
            let data = self.data.clone();
            Box::pin(async move { data })
        }

        fn clone_data_source(&self) -> Box<dyn TemplateDataSource> {
            Box::new(self.clone())
        }
    }

    fn source() -> StaticSource {
        let mut data = HashMap::new();
        data.insert("datetime".to_string(), "2023-10-01T12:00:00".to_string());
        data.insert("persona".to_string(), "a librarian".to_string());
        StaticSource { data }
    }

    #[tokio::test]
    async fn fills_from_source_and_caller() {
        let template = Template::new("It is {{datetime}}. You are {{persona}}. Task: {{task}}.", source());

        let mut user_data = HashMap::new();
        user_data.insert("task".to_string(), "sort books".to_string());

        assert_eq!(
            template.compile(&user_data).await,
            "It is 2023-10-01T12:00:00. You are a librarian. Task: sort books."
        );
    }

    #[tokio::test]
    async fn caller_values_override_source() {
        let template = Template::new("You are {{persona}}.", source());
        let mut user_data = HashMap::new();
        user_data.insert("persona".to_string(), "a pirate".to_string());
        assert_eq!(template.compile(&user_data).await, "You are a pirate.");
    }

    #[tokio::test]
    async fn unknown_placeholders_survive() {
        let template = Template::simple("Hello {{name}}, {{unknown}}");
        let mut data = HashMap::new();
        data.insert("name".to_string(), "Ada".to_string());
        let cloned = template.clone();
        assert_eq!(cloned.compile(&data).await, "Hello Ada, {{unknown}}");
    }
}
